use std::future::Future;

use self::cli::Cli;
use self::config::Config;
use self::kubernetes_objects::KubeClusterApi;
use self::routine::WaitRoutine;
use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_error::ExtractSpanTrace;
use tracing_error::SpanTrace;

pub mod cli;
pub mod config;
pub(crate) mod kubernetes_objects;
pub(crate) mod routine;
mod shutdown;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid arguments.\n{0}")]
    ConfigError(#[from] config::ConfigLoadError),

    #[error("Failed to determine namespace.\n{0}")]
    NamespaceError(#[from] config::NamespaceError),

    #[error("Failed to initialize kubernetes client.\n{0}")]
    KubeClientError(#[from] kube::Error),

    #[error("Stopped waiting for dependencies due to following error:\n{0}")]
    WaitError(#[from] crate::routine::error::WaitError),

    #[error("Interrupted by {0}.")]
    Interrupted(&'static str),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted("SIGINT") => 130,
            AppError::Interrupted("SIGTERM") => 143,
            _ => 1,
        }
    }
}

impl ExtractSpanTrace for AppError {
    fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            AppError::WaitError(e) => e.span_trace(),
            _ => None,
        }
    }
}

pub async fn app() -> Result<(), AppError> {
    run(Cli::parse()).await
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    run_until(cli, shutdown::shutdown_signal()).await
}

/// Runs the wait routine until it finishes or `shutdown` resolves. The
/// signal is honoured from the first cluster access on, including namespace
/// and client setup.
async fn run_until(
    cli: Cli,
    shutdown: impl Future<Output = &'static str>,
) -> Result<(), AppError> {
    let config = Config::try_from(cli)?;

    if config.is_empty() {
        info!("No jobs or services provided. Exiting...");
        return Ok(());
    }

    tokio::select! {
        biased;
        signal = shutdown => Err(AppError::Interrupted(signal)),
        result = wait_for_dependencies(&config) => result,
    }
}

async fn wait_for_dependencies(config: &Config) -> Result<(), AppError> {
    let namespace = config::read_namespace(&config.namespace_file).await?;

    info!("Determined namespace: {}", namespace);

    info!("Creating client...");
    let client = kube::Client::try_default().await?;

    info!("Kubernetes Client Initialized.");

    let routine = WaitRoutine::new(config, KubeClusterApi::new(client, &namespace));
    routine.run().await?;
    Ok(())
}
