//! Janitor implementation

use std::sync::Arc;
use std::time::Duration;

use sv_shared::JanitorConfig;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::{RevocationRepository, SessionRepository};
use crate::services::session::SessionManager;

/// Outcome of a sweep
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Expired refresh sessions deleted
    pub sessions_removed: u64,
    /// Expired revocation entries deleted
    pub revocations_removed: u64,
    /// Errors encountered during the sweep
    pub errors: Vec<String>,
}

impl SweepReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn total_removed(&self) -> u64 {
        self.sessions_removed + self.revocations_removed
    }
}

/// Handle to the spawned sweep loops
pub struct JanitorHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl JanitorHandle {
    /// Whether any sweep loop is still running
    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }

    /// Stops both loops
    pub fn shutdown(self) {
        for task in &self.tasks {
            task.abort();
        }
        info!("Janitor stopped");
    }
}

/// Scheduled garbage collection of expired records
pub struct Janitor<S: SessionRepository + 'static, R: RevocationRepository + 'static> {
    manager: Arc<SessionManager<S, R>>,
    config: JanitorConfig,
}

impl<S: SessionRepository + 'static, R: RevocationRepository + 'static> Janitor<S, R> {
    pub fn new(manager: Arc<SessionManager<S, R>>, config: JanitorConfig) -> Self {
        Self { manager, config }
    }

    /// Deletes expired refresh sessions once
    pub async fn run_session_sweep(&self) -> SweepReport {
        let mut report = SweepReport::default();
        match self.manager.cleanup_expired_sessions().await {
            Ok(count) => {
                report.sessions_removed = count;
                info!(removed = count, "Expired sessions swept");
            }
            Err(e) => record_failure(&mut report, "Session sweep", e),
        }
        report
    }

    /// Deletes expired revocation entries once
    pub async fn run_revocation_sweep(&self) -> SweepReport {
        let mut report = SweepReport::default();
        match self.manager.cleanup_expired_revocations().await {
            Ok(count) => {
                report.revocations_removed = count;
                info!(removed = count, "Expired revocations swept");
            }
            Err(e) => record_failure(&mut report, "Revocation sweep", e),
        }
        report
    }

    /// Spawns both sweep loops on the current tokio runtime
    ///
    /// Each loop sweeps once immediately and then on every interval tick.
    /// When disabled in configuration, nothing is spawned.
    pub fn start(self: Arc<Self>) -> JanitorHandle {
        if !self.config.enabled {
            warn!("Janitor is disabled");
            return JanitorHandle { tasks: Vec::new() };
        }

        info!(
            session_interval_secs = self.config.session_interval_secs,
            revocation_interval_secs = self.config.revocation_interval_secs,
            "Janitor started"
        );

        let sessions = {
            let janitor = Arc::clone(&self);
            let period = Duration::from_secs(self.config.session_interval_secs.max(1));
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(period);
                loop {
                    ticker.tick().await;
                    janitor.run_session_sweep().await;
                }
            })
        };

        let revocations = {
            let janitor = Arc::clone(&self);
            let period = Duration::from_secs(self.config.revocation_interval_secs.max(1));
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(period);
                loop {
                    ticker.tick().await;
                    janitor.run_revocation_sweep().await;
                }
            })
        };

        JanitorHandle {
            tasks: vec![sessions, revocations],
        }
    }
}

fn record_failure(report: &mut SweepReport, sweep: &str, e: DomainError) {
    error!(error = %e, "{} failed", sweep);
    report.errors.push(format!("{} error: {}", sweep, e));
}
