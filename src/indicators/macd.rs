//! Moving Average Convergence Divergence.

use super::moving_average::{ema, ema_of_defined};

/// MACD line, signal line and their difference, aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    /// `EMA(fast) − EMA(slow)`, defined from index `slow - 1`.
    pub macd: Vec<Option<f64>>,
    /// `EMA(macd, signal)`, defined from index `slow + signal - 2`.
    pub signal: Vec<Option<f64>>,
    /// `macd − signal`.
    pub diff: Vec<Option<f64>>,
}

pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);

    let macd: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let signal_line = ema_of_defined(&macd, signal);
    let diff = macd
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    MacdSeries {
        macd,
        signal: signal_line,
        diff,
    }
}
