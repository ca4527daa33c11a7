//! Bollinger bands.
//!
//! Middle band is the SMA over `window`; the outer bands sit `multiplier`
//! **sample** standard deviations (divisor `n − 1`) away from it.

use super::moving_average::sma;

/// Upper and lower bands, aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
}

/// Compute bands; callers guarantee `window >= 2`.
pub fn bollinger(values: &[f64], window: usize, multiplier: f64) -> BollingerBands {
    let middle = sma(values, window);
    let mut high = vec![None; values.len()];
    let mut low = vec![None; values.len()];

    for (i, mean) in middle.iter().enumerate() {
        let Some(mean) = *mean else { continue };
        let sq: f64 = values[i + 1 - window..=i]
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum();
        let std_dev = (sq / (window - 1) as f64).sqrt();
        high[i] = Some(mean + multiplier * std_dev);
        low[i] = Some(mean - multiplier * std_dev);
    }

    BollingerBands { high, low }
}
