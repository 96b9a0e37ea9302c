use crate::config::RunConfig;
use crate::driver::SessionDriver;
use crate::orchestrator::error::OrchestratorResult;
use crate::orchestrator::types::RunResult;
use crate::orchestrator::worker;
use crate::target::expand_targets;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::time;
use tracing::{error, info};

/// Launches one worker per session target with staggered starts, holds each
/// session open for the configured duration, and waits for every worker to
/// reach a terminal state before reporting.
pub struct SessionOrchestrator {
    config: RunConfig,
    driver: Arc<dyn SessionDriver>,
}

impl SessionOrchestrator {
    /// Create an orchestrator for a validated config and an injected driver.
    pub fn new(config: RunConfig, driver: Arc<dyn SessionDriver>) -> OrchestratorResult<Self> {
        config.validate()?;
        Ok(Self { config, driver })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the whole load profile to completion.
    ///
    /// Launch order equals target order; completion order is not guaranteed.
    /// A failed target never aborts or cancels the others, and no worker is
    /// left detached when this returns.
    pub async fn run(&self) -> RunResult {
        let started = Instant::now();
        let targets = expand_targets(&self.config);
        let last = targets.len().saturating_sub(1);

        info!(
            mode = %self.config.mode,
            sessions = targets.len(),
            stagger_ms = self.config.inter_arrival_delay.as_millis() as u64,
            hold_secs = self.config.session_duration.as_secs(),
            "launching session workers"
        );

        let mut handles = Vec::with_capacity(targets.len());
        for (i, target) in targets.into_iter().enumerate() {
            let driver = Arc::clone(&self.driver);
            let hold = self.config.session_duration;
            handles.push(tokio::spawn(worker::drive_session(driver, target, hold)));

            // Deliberate load shaping: simultaneous mass joins are not a
            // realistic arrival pattern. No trailing gap after the last one.
            if i < last && !self.config.inter_arrival_delay.is_zero() {
                time::sleep(self.config.inter_arrival_delay).await;
            }
        }

        let mut result = RunResult::default();
        for joined in join_all(handles).await {
            match joined {
                Ok(outcome) => result.record(outcome),
                Err(e) => error!(error = %e, "session worker panicked"),
            }
        }
        result.elapsed = started.elapsed();

        info!(
            joined = result.successful_joins,
            failed = result.failures.len(),
            leave_diagnostics = result.leave_diagnostics.len(),
            elapsed_ms = result.elapsed.as_millis() as u64,
            "run complete"
        );

        result
    }
}
