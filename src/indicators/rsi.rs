//! Relative Strength Index.
//!
//! ```text
//! change_t = close_t − close_{t−1}      (change_0 = 0)
//! RS       = avg(gains) / avg(|losses|) over the trailing `window` changes
//! RSI      = 100 − 100 / (1 + RS)       (100 when avg loss is 0)
//! ```
//!
//! Taking the first change as zero lines the window up with the bars, so RSI
//! is defined from index `window - 1` like every other indicator here.

use serde::{Deserialize, Serialize};

/// How gains and losses are averaged over the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RsiSmoothing {
    /// Plain mean of the trailing `window` changes.
    #[default]
    Simple,
    /// Wilder's recursive average, `avg_t = avg_{t−1} + (x_t − avg_{t−1}) / window`,
    /// started from the zero change at bar 0.
    Wilder,
}

/// RSI per value; `None` for the first `window - 1` slots.
pub fn rsi(values: &[f64], window: usize, smoothing: RsiSmoothing) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let changes: Vec<f64> = std::iter::once(0.0)
        .chain(values.windows(2).map(|w| w[1] - w[0]))
        .collect();
    let gains: Vec<f64> = changes.iter().map(|c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|c| (-c).max(0.0)).collect();

    match smoothing {
        RsiSmoothing::Simple => {
            let w = window as f64;
            for i in (window - 1)..values.len() {
                let range = i + 1 - window..=i;
                let avg_gain = gains[range.clone()].iter().sum::<f64>() / w;
                let avg_loss = losses[range].iter().sum::<f64>() / w;
                out[i] = Some(from_averages(avg_gain, avg_loss));
            }
        }
        RsiSmoothing::Wilder => {
            let alpha = 1.0 / window as f64;
            let (mut avg_gain, mut avg_loss) = (gains[0], losses[0]);
            for i in 0..values.len() {
                if i > 0 {
                    avg_gain += (gains[i] - avg_gain) * alpha;
                    avg_loss += (losses[i] - avg_loss) * alpha;
                }
                if i + 1 >= window {
                    out[i] = Some(from_averages(avg_gain, avg_loss));
                }
            }
        }
    }
    out
}

fn from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_loss_is_100_even_without_gains() {
        assert_eq!(from_averages(0.0, 0.0), 100.0);
        assert_eq!(from_averages(3.0, 0.0), 100.0);
    }

    #[test]
    fn equal_gain_and_loss_is_50() {
        assert!((from_averages(2.0, 2.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn wilder_and_simple_agree_for_window_one() {
        let closes = [10.0, 11.0, 10.5, 10.7];
        let simple = rsi(&closes, 1, RsiSmoothing::Simple);
        let wilder = rsi(&closes, 1, RsiSmoothing::Wilder);
        for (s, w) in simple.iter().zip(&wilder) {
            let (s, w) = (s.unwrap(), w.unwrap());
            assert!((s - w).abs() < 1e-9, "simple {s} vs wilder {w}");
        }
    }
}
