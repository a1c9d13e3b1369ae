//! Per-ticker signal evaluation: TEMA crossover gated by regime, weekly
//! trend and ADX strength.

use crate::indicators::{calculate_adx, tema};
use crate::models::{Direction, PriceSeries, RegimeState, SignalCandidate};

pub const FAST_TEMA_PERIOD: usize = 5;
pub const SLOW_TEMA_PERIOD: usize = 50;
pub const ADX_LENGTH: usize = 14;
pub const ADX_THRESHOLD: f64 = 18.0;

/// A crossover needs the previous and the latest daily bar.
pub const MIN_DAILY_BARS: usize = 2;

/// Latest indicator readings for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSnapshot {
    pub last_close: f64,
    pub fast: f64,
    pub slow: f64,
    pub prev_fast: f64,
    pub prev_slow: f64,
    pub weekly_fast: f64,
    pub adx: Option<f64>,
}

impl TickerSnapshot {
    /// Fast TEMA was below slow on the prior bar and is above it now.
    pub fn crossed_above(&self) -> bool {
        self.prev_fast < self.prev_slow && self.fast > self.slow
    }

    pub fn crossed_below(&self) -> bool {
        self.prev_fast > self.prev_slow && self.fast < self.slow
    }

    fn trending(&self) -> bool {
        self.adx.is_some_and(|adx| adx > ADX_THRESHOLD)
    }
}

pub struct SignalEngine;

impl SignalEngine {
    /// Compute the readings the rules need. `None` when either series is too
    /// short to evaluate.
    pub fn snapshot(daily: &PriceSeries, weekly: &PriceSeries) -> Option<TickerSnapshot> {
        if daily.len() < MIN_DAILY_BARS || weekly.is_empty() {
            return None;
        }

        let closes = daily.closes();
        let fast = tema(&closes, FAST_TEMA_PERIOD).ok()?;
        let slow = tema(&closes, SLOW_TEMA_PERIOD).ok()?;
        let adx = calculate_adx(&daily.highs(), &daily.lows(), &closes, ADX_LENGTH).ok()?;
        let weekly_fast = tema(&weekly.closes(), FAST_TEMA_PERIOD).ok()?;

        let last = closes.len() - 1;
        Some(TickerSnapshot {
            last_close: closes[last],
            fast: fast[last],
            slow: slow[last],
            prev_fast: fast[last - 1],
            prev_slow: slow[last - 1],
            weekly_fast: *weekly_fast.last()?,
            adx: adx[last],
        })
    }

    /// Apply the entry rules to a snapshot. LONG needs a BULL regime, an
    /// upward crossover, a close above the weekly fast TEMA and ADX above the
    /// threshold; SHORT mirrors it under BEAR.
    pub fn decide(
        ticker: &str,
        snapshot: &TickerSnapshot,
        regime: RegimeState,
    ) -> Option<SignalCandidate> {
        if !snapshot.trending() {
            return None;
        }

        let direction = if regime.allows(Direction::Long)
            && snapshot.crossed_above()
            && snapshot.last_close > snapshot.weekly_fast
        {
            Direction::Long
        } else if regime.allows(Direction::Short)
            && snapshot.crossed_below()
            && snapshot.last_close < snapshot.weekly_fast
        {
            Direction::Short
        } else {
            return None;
        };

        Some(SignalCandidate {
            ticker: ticker.to_string(),
            direction,
            trigger_price: snapshot.last_close,
            adx_at_trigger: snapshot.adx?,
        })
    }

    /// Evaluate one ticker. At most one candidate is produced.
    pub fn evaluate(
        daily: &PriceSeries,
        weekly: &PriceSeries,
        regime: RegimeState,
    ) -> Option<SignalCandidate> {
        if regime == RegimeState::Neutral {
            return None;
        }
        let snapshot = Self::snapshot(daily, weekly)?;
        Self::decide(daily.ticker(), &snapshot, regime)
    }
}
