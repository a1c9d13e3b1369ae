//! Market regime from the benchmark's position against its long average.

use crate::common::math;
use crate::models::{PriceSeries, RegimeState};

/// Sessions in the long simple moving average.
pub const REGIME_SMA_PERIOD: usize = 200;

pub struct RegimeClassifier;

impl RegimeClassifier {
    /// Classify from benchmark daily closes (oldest first).
    ///
    /// BULL when the latest close is above the trailing 200-session SMA, BEAR
    /// when below. Equality, fewer than 200 sessions, or a non-finite input
    /// all give NEUTRAL, which suppresses every signal of the scan.
    pub fn classify_closes(closes: &[f64]) -> RegimeState {
        let (Some(sma), Some(&last)) = (math::sma_last(closes, REGIME_SMA_PERIOD), closes.last())
        else {
            return RegimeState::Neutral;
        };

        if last > sma {
            RegimeState::Bull
        } else if last < sma {
            RegimeState::Bear
        } else {
            RegimeState::Neutral
        }
    }

    pub fn classify(benchmark: &PriceSeries) -> RegimeState {
        Self::classify_closes(&benchmark.closes())
    }
}
