mod namespace;
pub(crate) mod polling;

pub use self::namespace::NamespaceError;
pub(crate) use self::namespace::read_namespace;

use self::polling::PollingConfig;
use crate::cli::Cli;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TargetKind {
    Job,
    Service,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Job => f.write_str("job"),
            TargetKind::Service => f.write_str("service"),
        }
    }
}

/// One named resource that has to become ready before the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WaitTarget {
    pub(crate) kind: TargetKind,
    pub(crate) name: String,
}

impl WaitTarget {
    pub(crate) fn job(name: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Job,
            name: name.into(),
        }
    }

    pub(crate) fn service(name: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Service,
            name: name.into(),
        }
    }
}

impl fmt::Display for WaitTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Jobs first, then services, each in the order they were given.
    pub(crate) targets: Vec<WaitTarget>,
    pub(crate) polling: PollingConfig,
    pub(crate) namespace_file: PathBuf,
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("{kind} name must not be empty")]
    EmptyTargetName { kind: &'static str },
}

impl Config {
    pub(crate) fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl TryFrom<Cli> for Config {
    type Error = ConfigLoadError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let jobs = cli.jobs.into_iter().map(|name| {
            if name.is_empty() {
                Err(ConfigLoadError::EmptyTargetName { kind: "Job" })
            } else {
                Ok(WaitTarget::job(name))
            }
        });
        let services = cli.services.into_iter().map(|name| {
            if name.is_empty() {
                Err(ConfigLoadError::EmptyTargetName { kind: "Service" })
            } else {
                Ok(WaitTarget::service(name))
            }
        });
        let targets = jobs.chain(services).collect::<Result<Vec<_>, _>>()?;

        Ok(Config {
            targets,
            polling: PollingConfig::with_check_interval(Duration::from_secs(cli.check_interval)),
            namespace_file: cli.namespace_file,
        })
    }
}
