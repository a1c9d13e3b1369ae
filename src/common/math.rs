//! Moving averages and range helpers over plain slices.

/// Exponentially weighted mean with recursive (non-adjusted) weighting.
///
/// Matches `ewm(alpha, adjust=False).mean()` including its handling of missing
/// values: output is `None` until the first observation, which seeds the mean.
/// A missing value repeats the previous mean and decays the old weight by
/// `1 - alpha` once more, so after `k` gaps the next observation `x` gives
/// `((1-a)^(k+1)*m + a*x) / ((1-a)^(k+1) + a)`.
pub fn ewm(values: &[Option<f64>], alpha: f64) -> Vec<Option<f64>> {
    let decay = 1.0 - alpha;
    let mut out = Vec::with_capacity(values.len());
    let mut mean: Option<f64> = None;
    let mut old_weight = 1.0;

    for value in values {
        match (mean, value) {
            (None, Some(x)) => {
                mean = Some(*x);
                old_weight = 1.0;
            }
            (Some(m), Some(x)) => {
                old_weight *= decay;
                mean = Some((old_weight * m + alpha * x) / (old_weight + alpha));
                old_weight = 1.0;
            }
            (Some(_), None) => old_weight *= decay,
            (None, None) => {}
        }
        out.push(mean);
    }

    out
}

/// [`ewm`] over a gap-free series. Defined from index 0.
pub fn ewm_dense(values: &[f64], alpha: f64) -> Vec<f64> {
    let decay = 1.0 - alpha;
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &x in values {
        let next = match prev {
            Some(p) => (decay * p + alpha * x) / (decay + alpha),
            None => x,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Mean of the trailing `window` values, `None` when fewer are available.
pub fn sma_last(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// True range of a bar against the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Treat NaN and infinities as missing.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
