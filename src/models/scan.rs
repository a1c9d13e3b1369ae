//! Machine-readable summary of one scan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::options::SelectedContract;
use super::signal::{RegimeState, SignalCandidate};

/// Which of the three report shapes a scan produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanOutcome {
    NoSignals,
    Signals { count: usize },
    NoSuitableOptions { candidates: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub started_at: DateTime<Utc>,
    pub regime: RegimeState,
    /// Universe size excluding the benchmark.
    pub tickers_requested: usize,
    pub tickers_evaluated: usize,
    pub tickers_skipped: usize,
    pub candidates: Vec<SignalCandidate>,
    pub contract_lookups: usize,
    pub selections: Vec<SelectedContract>,
    pub outcome: ScanOutcome,
    pub notification_sent: bool,
}
