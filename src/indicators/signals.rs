//! Caller-facing classification helpers: MACD crossovers and RSI zones.
//!
//! None of this is stored on the enriched series; alerting code derives it on
//! demand.

use serde::{Deserialize, Serialize};

use crate::constants::indicators::{RSI_OVERBOUGHT, RSI_OVERSOLD};

/// Direction of a MACD / signal-line crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crossover {
    /// `MACD_diff` went from `<= 0` to `> 0`.
    Bullish,
    /// `MACD_diff` went from `>= 0` to `< 0`.
    Bearish,
}

/// Crossover at bar `t`, comparing `diff[t - 1]` with `diff[t]`.
///
/// Returns `None` for `t == 0`, out-of-range `t`, or when either value is
/// absent.
pub fn macd_crossover(diff: &[Option<f64>], t: usize) -> Option<Crossover> {
    if t == 0 {
        return None;
    }
    let prev = (*diff.get(t - 1)?)?;
    let curr = (*diff.get(t)?)?;
    if prev <= 0.0 && curr > 0.0 {
        Some(Crossover::Bullish)
    } else if prev >= 0.0 && curr < 0.0 {
        Some(Crossover::Bearish)
    } else {
        None
    }
}

/// Every crossover in `diff`, as `(index, direction)` in ascending order.
pub fn macd_crossovers(diff: &[Option<f64>]) -> Vec<(usize, Crossover)> {
    (1..diff.len())
        .filter_map(|t| macd_crossover(diff, t).map(|c| (t, c)))
        .collect()
}

/// RSI classification against the fixed 70 / 30 thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsiZone {
    /// RSI > 70.
    Overbought,
    /// RSI < 30.
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn classify(rsi: f64) -> Self {
        if rsi > RSI_OVERBOUGHT {
            Self::Overbought
        } else if rsi < RSI_OVERSOLD {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }
}
