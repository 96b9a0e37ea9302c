use crate::driver::driver::{SessionDriver, SessionHandle};
use crate::driver::error::{JoinError, LeaveError};
use async_trait::async_trait;
use dashmap::DashMap;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SimulatedDriverConfig {
    pub join_latency: Duration,
    pub leave_latency: Duration,
    /// Probability in [0, 1] that a join times out.
    pub join_failure_rate: f64,
    /// Probability in [0, 1] that a leave times out.
    pub leave_failure_rate: f64,
}

impl Default for SimulatedDriverConfig {
    fn default() -> Self {
        Self {
            join_latency: Duration::from_millis(150),
            leave_latency: Duration::from_millis(50),
            join_failure_rate: 0.0,
            leave_failure_rate: 0.0,
        }
    }
}

/// In-process stand-in for a real browser driver.
///
/// Sleeps to model join/leave latency, rolls injected failures, and tracks
/// live sessions so a handle it no longer knows about is reported as gone.
pub struct SimulatedDriver {
    config: SimulatedDriverConfig,
    active: DashMap<Uuid, String>,
    joins: AtomicU64,
    leaves: AtomicU64,
}

impl SimulatedDriver {
    pub fn new(config: SimulatedDriverConfig) -> Self {
        Self {
            config,
            active: DashMap::new(),
            joins: AtomicU64::new(0),
            leaves: AtomicU64::new(0),
        }
    }

    /// Number of join attempts observed.
    pub fn join_count(&self) -> u64 {
        self.joins.load(Ordering::Relaxed)
    }

    /// Number of leave attempts observed.
    pub fn leave_count(&self) -> u64 {
        self.leaves.load(Ordering::Relaxed)
    }

    /// Sessions currently held open.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl Default for SimulatedDriver {
    fn default() -> Self {
        Self::new(SimulatedDriverConfig::default())
    }
}

#[async_trait]
impl SessionDriver for SimulatedDriver {
    async fn join(&self, room_address: &str, identity: &str) -> Result<SessionHandle, JoinError> {
        self.joins.fetch_add(1, Ordering::Relaxed);

        if !self.config.join_latency.is_zero() {
            time::sleep(self.config.join_latency).await;
        }

        if rand::thread_rng().gen::<f64>() < self.config.join_failure_rate {
            return Err(JoinError::ConfirmationTimeout {
                timeout_ms: self.config.join_latency.as_millis() as u64,
            });
        }

        let handle = SessionHandle::new(room_address, identity);
        self.active.insert(handle.id(), identity.to_string());
        Ok(handle)
    }

    async fn leave(&self, handle: SessionHandle) -> Result<(), LeaveError> {
        self.leaves.fetch_add(1, Ordering::Relaxed);

        if !self.config.leave_latency.is_zero() {
            time::sleep(self.config.leave_latency).await;
        }

        if self.active.remove(&handle.id()).is_none() {
            return Err(LeaveError::DriverGone(format!(
                "no live session for {}",
                handle.identity()
            )));
        }

        if rand::thread_rng().gen::<f64>() < self.config.leave_failure_rate {
            return Err(LeaveError::ConfirmationTimeout {
                timeout_ms: self.config.leave_latency.as_millis() as u64,
            });
        }

        Ok(())
    }
}
