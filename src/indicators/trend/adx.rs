//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::error::IndicatorError;

/// Floor applied to a zero `+DI + -DI` denominator.
pub const DX_EPSILON: f64 = 1e-6;

/// Directional movement, clipped per side.
///
/// Each side is clipped independently: `+DM = max(high - prev_high, 0)` and
/// `-DM = max(prev_low - low, 0)`. Unlike textbook ADX, an outside bar keeps
/// both values instead of zeroing the smaller one.
fn directional_movement(high: &[f64], low: &[f64]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let mut plus = Vec::with_capacity(high.len());
    let mut minus = Vec::with_capacity(high.len());
    for i in 0..high.len() {
        if i == 0 {
            plus.push(None);
            minus.push(None);
            continue;
        }
        plus.push(Some((high[i] - high[i - 1]).max(0.0)));
        minus.push(Some((low[i] - low[i - 1]).min(0.0).abs()));
    }
    (plus, minus)
}

fn true_ranges(high: &[f64], low: &[f64], close: &[f64]) -> Vec<Option<f64>> {
    (0..high.len())
        .map(|i| {
            if i == 0 {
                Some(high[0] - low[0])
            } else {
                Some(math::true_range(high[i], low[i], close[i - 1]))
            }
        })
        .collect()
}

fn check_inputs(high: &[f64], low: &[f64], close: &[f64], length: usize) -> Result<(), IndicatorError> {
    if length == 0 {
        return Err(IndicatorError::InvalidPeriod(length));
    }
    if high.len() != low.len() || high.len() != close.len() {
        return Err(IndicatorError::LengthMismatch {
            high: high.len(),
            low: low.len(),
            close: close.len(),
        });
    }
    Ok(())
}

/// Calculate the DX series.
///
/// Wilder smoothing is an EMA with `alpha = 1/length` applied to TR, +DM and
/// -DM. Index 0 is `None` (no previous bar); so is any bar where the ratio is
/// not finite, e.g. a perfectly flat series with zero ATR.
pub fn calculate_dx(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    length: usize,
) -> Result<Vec<Option<f64>>, IndicatorError> {
    check_inputs(high, low, close, length)?;

    let alpha = 1.0 / length as f64;
    let (plus_dm, minus_dm) = directional_movement(high, low);
    let atr = math::ewm(&true_ranges(high, low, close), alpha);
    let plus_smoothed = math::ewm(&plus_dm, alpha);
    let minus_smoothed = math::ewm(&minus_dm, alpha);

    let dx = (0..high.len())
        .map(|i| {
            let (atr, plus, minus) = (atr[i]?, plus_smoothed[i]?, minus_smoothed[i]?);
            let plus_di = math::finite(100.0 * plus / atr)?;
            let minus_di = math::finite(100.0 * minus / atr)?;
            let mut di_sum = plus_di + minus_di;
            if di_sum == 0.0 {
                di_sum = DX_EPSILON;
            }
            math::finite(100.0 * (plus_di - minus_di).abs() / di_sum)
        })
        .collect();

    Ok(dx)
}

/// Calculate ADX: the DX series smoothed again with `alpha = 1/length`.
///
/// Output has the same length as the inputs with index 0 undefined. Values
/// lie in [0, 100] up to rounding, so 100 can be overshot by a few ulps.
pub fn calculate_adx(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    length: usize,
) -> Result<Vec<Option<f64>>, IndicatorError> {
    let dx = calculate_dx(high, low, close, length)?;
    Ok(math::ewm(&dx, 1.0 / length as f64))
}
