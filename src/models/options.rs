//! Options contracts as seen by the selector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::signal::SignalCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractType {
    Call,
    Put,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Call => "CALL",
            ContractType::Put => "PUT",
        }
    }

    /// Single-letter suffix used in contract descriptions (`180.0C`).
    pub fn suffix(&self) -> char {
        match self {
            ContractType::Call => 'C',
            ContractType::Put => 'P',
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contract of a chain snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub strike: f64,
    pub expiration: DateTime<Utc>,
    pub days_to_expiration: i64,
    pub delta: f64,
    /// As quoted by the chain provider, in percent.
    pub implied_volatility: f64,
    pub open_interest: u64,
    pub volume: u64,
    pub in_the_money: bool,
}

/// A candidate paired with the contract chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedContract {
    pub candidate: SignalCandidate,
    pub contract: OptionContract,
}
