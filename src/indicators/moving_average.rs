//! Simple and exponential moving averages.
//!
//! Both return one slot per input value; the first `window - 1` slots are
//! `None`.

/// Arithmetic mean over the trailing `window` values (inclusive).
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    let w = window as f64;
    for i in (window - 1)..values.len() {
        let sum: f64 = values[i + 1 - window..=i].iter().sum();
        out[i] = Some(sum / w);
    }
    out
}

/// Exponential moving average with `α = 2 / (window + 1)`.
///
/// The first defined value (index `window - 1`) is the SMA of the first
/// `window` values; every later value is `v·α + prev·(1 − α)`.
pub fn ema(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    let alpha = 2.0 / (window as f64 + 1.0);

    let mut prev = values[..window].iter().sum::<f64>() / window as f64;
    out[window - 1] = Some(prev);
    for (i, &v) in values.iter().enumerate().skip(window) {
        prev = v * alpha + prev * (1.0 - alpha);
        out[i] = Some(prev);
    }
    out
}

/// EMA over a series whose leading values may be absent.
///
/// Seeding starts at the first defined value; the output stays aligned with
/// `series`. The defined values are expected to be contiguous, which holds
/// for any output of this module.
pub fn ema_of_defined(series: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; series.len()];
    let Some(start) = series.iter().position(Option::is_some) else {
        return out;
    };
    let defined: Vec<f64> = series[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in ema(&defined, window).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}
