pub mod error;
mod poller;
mod wait_until_job_succeeded;
mod wait_until_service_ready;

use std::time::Duration;

use tracing::{info, instrument};

use crate::config::{Config, TargetKind};
use crate::kubernetes_objects::ClusterApi;

use self::error::WaitError;
use self::poller::wait_for;
use self::wait_until_job_succeeded::JobEvaluator;
use self::wait_until_service_ready::ServiceEvaluator;

pub(crate) struct WaitRoutine<'a, A> {
    config: &'a Config,
    api: A,
}

impl<'a, A: ClusterApi> WaitRoutine<'a, A> {
    pub(crate) fn new(config: &'a Config, api: A) -> Self {
        WaitRoutine { config, api }
    }

    /// Waits for every target in order. The first fatal condition stops the
    /// routine; later targets are not looked at.
    #[instrument("wait_routine", skip(self))]
    pub(crate) async fn run(&self) -> Result<(), WaitError> {
        info!(
            "Waiting for {} dependencies...",
            self.config.targets.len()
        );

        let mut attempts = 0u64;
        let mut waited = Duration::ZERO;
        for target in &self.config.targets {
            let report = match target.kind {
                TargetKind::Job => {
                    let mut evaluator = JobEvaluator::new(&self.api, target);
                    wait_for(&mut evaluator, &self.config.polling).await?
                }
                TargetKind::Service => {
                    let mut evaluator = ServiceEvaluator::new(&self.api, target);
                    wait_for(&mut evaluator, &self.config.polling).await?
                }
            };
            attempts += report.attempts;
            waited += report.waited;
        }

        info!(
            "All dependencies are ready ({} checks, {} seconds spent waiting).",
            attempts,
            waited.as_secs()
        );
        Ok(())
    }
}
