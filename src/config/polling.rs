use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PollingConfig {
    /// Delay after a missing object, an API error or a not yet ready object.
    pub(crate) check_interval: Duration,

    /// Delay after a service selected no pods at all. Rollouts usually
    /// create pods quickly, so this is kept shorter than `check_interval`.
    pub(crate) empty_retry_interval: Duration,
}

impl PollingConfig {
    pub(crate) fn with_check_interval(check_interval: Duration) -> Self {
        Self {
            check_interval,
            ..Self::default()
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            check_interval: default_check_interval(),
            empty_retry_interval: default_empty_retry_interval(),
        }
    }
}

const fn default_check_interval() -> Duration {
    Duration::from_secs(5)
}
const fn default_empty_retry_interval() -> Duration {
    Duration::from_secs(1)
}
