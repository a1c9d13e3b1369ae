//! Signal direction, market regime and trade candidates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::options::ContractType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Long signals are expressed with calls, short signals with puts.
    pub fn contract_type(&self) -> ContractType {
        match self {
            Direction::Long => ContractType::Call,
            Direction::Short => ContractType::Put,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "LONG"),
            Direction::Short => write!(f, "SHORT"),
        }
    }
}

/// Market-wide regime derived once per scan from the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegimeState {
    Bull,
    Bear,
    Neutral,
}

impl RegimeState {
    /// Whether a candidate in `direction` may be emitted under this regime.
    pub fn allows(&self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (RegimeState::Bull, Direction::Long) | (RegimeState::Bear, Direction::Short)
        )
    }
}

impl fmt::Display for RegimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegimeState::Bull => write!(f, "BULL"),
            RegimeState::Bear => write!(f, "BEAR"),
            RegimeState::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// A directional trade idea for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalCandidate {
    pub ticker: String,
    pub direction: Direction,
    pub trigger_price: f64,
    pub adx_at_trigger: f64,
}
