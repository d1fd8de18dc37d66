use clap::Parser;
use std::path::PathBuf;

pub(crate) const DEFAULT_NAMESPACE_FILE: &str =
    "/var/run/secrets/kubernetes.io/serviceaccount/namespace";

/// Blocks until the given jobs have completed and the given services have a ready pod.
#[derive(Debug, Parser)]
#[clap(name = "depends-on", version)]
pub struct Cli {
    /// Job, which successful completion to wait for. Can be specified multiple times
    #[clap(long = "job", value_name = "NAME", value_parser = trimmed)]
    pub(crate) jobs: Vec<String>,

    /// Service, which pods to wait for. Can be specified multiple times
    #[clap(long = "service", value_name = "NAME", value_parser = trimmed)]
    pub(crate) services: Vec<String>,

    /// Seconds to wait between check attempts
    #[clap(
        long = "check_interval",
        alias = "check-interval",
        value_name = "SECONDS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) check_interval: u64,

    /// File holding the namespace the dependencies live in
    #[clap(
        long,
        env = "DEPENDS_ON_NAMESPACE_FILE",
        default_value = DEFAULT_NAMESPACE_FILE
    )]
    pub(crate) namespace_file: PathBuf,
}

fn trimmed(value: &str) -> Result<String, String> {
    Ok(value.trim().to_string())
}
