//! EMA (Exponential Moving Average) and TEMA (Triple EMA) indicators

use crate::common::math;
use crate::error::IndicatorError;

/// Smoothing factor for a span-based EMA: `2 / (period + 1)`.
pub fn span_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Full EMA series for `period`, seeded with the first value.
pub fn calculate_ema(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod(period));
    }
    Ok(math::ewm_dense(values, span_alpha(period)))
}

/// Calculate TEMA: `3*EMA1 - 3*EMA2 + EMA3` over three cascaded EMAs.
///
/// Every EMA is seeded with its first input, so the output has the same
/// length as `values` and is defined from index 0. The early values carry a
/// warm-up bias; callers must not expect NaN padding.
pub fn tema(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    let ema1 = calculate_ema(values, period)?;
    let ema2 = calculate_ema(&ema1, period)?;
    let ema3 = calculate_ema(&ema2, period)?;

    Ok(ema1
        .iter()
        .zip(&ema2)
        .zip(&ema3)
        .map(|((e1, e2), e3)| 3.0 * e1 - 3.0 * e2 + e3)
        .collect())
}
