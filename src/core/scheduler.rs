//! Cron-based scheduler that runs a full scan on every tick

use crate::core::scanner::Scanner;
use crate::error::ConfigError;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Fallback wait when the expression has no upcoming fire time.
const IDLE_RECHECK_SECS: u64 = 60;

/// Scheduler that runs [`Scanner::run`] at each cron fire time
pub struct ScanScheduler {
    scanner: Arc<Scanner>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `scanner` - The scanner to run on each tick
    /// * `expression` - Cron expression with a seconds field
    ///   (`sec min hour day-of-month month day-of-week`)
    pub fn new(scanner: Arc<Scanner>, expression: &str) -> Result<Self, ConfigError> {
        let schedule = Schedule::from_str(expression).map_err(|e| ConfigError::Invalid {
            key: "SCAN_SCHEDULE",
            value: expression.to_string(),
            reason: e.to_string(),
        })?;

        info!(
            cron = %expression,
            "ScanScheduler: created with cron expression {}",
            expression
        );

        Ok(Self {
            scanner,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Next fire time after now, if any.
    pub fn next_run(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.schedule.upcoming(chrono::Utc).next()
    }

    /// Start the scheduler
    pub async fn start(&self) {
        let scanner = self.scanner.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ScanScheduler: started, waiting for cron schedule...");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        info!(next = %next_tick, "ScanScheduler: next scan at {}", next_tick);
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(IDLE_RECHECK_SECS)).await;
                    continue;
                }

                info!("ScanScheduler: cron tick, starting scan");

                // A failed scan is logged; the next tick still fires.
                match scanner.run().await {
                    Ok(report) => {
                        info!(
                            outcome = ?report.outcome,
                            candidates = report.candidates.len(),
                            selections = report.selections.len(),
                            "ScanScheduler: scan finished"
                        );
                    }
                    Err(e) => {
                        error!(error = %e, "ScanScheduler: scan failed");
                    }
                }
            }
        });

        {
            let mut h = self.handle.write().await;
            if let Some(previous) = h.replace(handle) {
                previous.abort();
            }
        }

        info!("ScanScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ScanScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
