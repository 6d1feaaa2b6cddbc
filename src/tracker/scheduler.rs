//! Periodic commit of pending credits
//!
//! The scheduler owns a tokio task that calls [`TrackerSession::commit_ready`]
//! on an interval. Sweeps take the same session lock as the edit path,
//! so a sweep never sees a half-applied edit.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use super::session::SharedSession;

/// Handle to a running commit task
///
/// Dropping the handle aborts the task; [`CommitScheduler::shutdown`] stops
/// it gracefully and waits for it to exit.
pub struct CommitScheduler {
    shutdown_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl CommitScheduler {
    /// Spawn the task using the session's configured interval.
    ///
    /// The interval is re-read after every sweep, so a config change takes
    /// effect from the next tick on.
    pub fn start(session: SharedSession) -> Self {
        let period = match session.lock() {
            Ok(guard) => guard.settings().commit_interval(),
            Err(_) => Duration::from_secs(5),
        };
        Self::launch(session, period, true)
    }

    /// Spawn the task with a fixed interval. Must be called inside a
    /// tokio runtime.
    pub fn spawn(session: SharedSession, period: Duration) -> Self {
        Self::launch(session, period, false)
    }

    fn launch(session: SharedSession, mut period: Duration, follow_config: bool) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = ticker_from(Instant::now(), period);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let Some(configured) = sweep(&session) else {
                            break;
                        };
                        if follow_config && configured != period {
                            tracing::debug!(from = ?period, to = ?configured, "Commit interval changed");
                            period = configured;
                            ticker = ticker_from(Instant::now() + period, period);
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("Commit scheduler stopped");
        });

        tracing::debug!(?period, follow_config, "Commit scheduler started");
        Self {
            shutdown_tx,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the task and wait until it has exited
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Commit scheduler task failed: {}", e);
            }
        }
    }
}

impl Drop for CommitScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

fn ticker_from(start: Instant, period: Duration) -> Interval {
    let mut ticker = tokio::time::interval_at(start, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// One sweep, returning the interval configured afterwards.
/// `None` means the session is unusable and the task should end.
fn sweep(session: &SharedSession) -> Option<Duration> {
    match session.lock() {
        Ok(mut session) => {
            session.commit_ready();
            Some(session.settings().commit_interval())
        }
        Err(_) => {
            tracing::warn!("Session lock poisoned, stopping commit scheduler");
            None
        }
    }
}
