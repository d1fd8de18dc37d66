use k8s_openapi::api::core::v1::Service;

/// Renders the service's pod selector as a label selector string.
///
/// A service without a selector yields the empty selector, which matches
/// every pod in the namespace.
pub(crate) fn label_selector(service: &Service) -> String {
    service
        .spec
        .as_ref()
        .and_then(|spec| spec.selector.as_ref())
        .map(|selector| {
            selector
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_default()
}
