//! Indicator engine.
//!
//! [`compute_indicators`] takes an ordered run of [`PriceBar`]s and an
//! explicit [`IndicatorParams`] and returns an [`EnrichedSeries`]: the input
//! bars paired with SMA, EMA, RSI, MACD (line, signal, diff) and Bollinger
//! bands. Leading bars whose trailing window is incomplete carry `None`;
//! short series are not an error.
//!
//! The per-indicator functions in the submodules work on plain `&[f64]`
//! closes and are public for callers that only need one column.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use nse_scope::indicators::{compute_indicators, IndicatorParams};
//! use nse_scope::types::bar::PriceBar;
//!
//! let bars: Vec<PriceBar> = (0..30)
//!     .map(|i| PriceBar {
//!         timestamp: Utc.timestamp_opt(1_700_000_000 + i * 86_400, 0).unwrap(),
//!         open: 100.0,
//!         high: 101.0,
//!         low: 99.0,
//!         close: 100.0 + i as f64,
//!         volume: 1_000,
//!     })
//!     .collect();
//!
//! let enriched = compute_indicators(&bars, &IndicatorParams::default()).unwrap();
//! assert!(enriched.rows()[18].indicators.sma.is_none());
//! assert!(enriched.rows()[19].indicators.sma.is_some());
//! ```

pub mod bollinger;
pub mod macd;
pub mod moving_average;
pub mod rsi;
pub mod signals;

use serde::{Deserialize, Serialize};

use crate::constants::indicators as defaults;
use crate::error::{Result, ScopeError};
use crate::types::bar::{PriceBar, validate_bars};

pub use rsi::RsiSmoothing;
pub use signals::{Crossover, RsiZone, macd_crossover, macd_crossovers};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Window sizes for every indicator family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Window for SMA and EMA.
    pub ma_window: usize,
    pub rsi_window: usize,
    pub rsi_smoothing: RsiSmoothing,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_window: usize,
    pub bollinger_std_multiplier: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ma_window: defaults::MA_WINDOW,
            rsi_window: defaults::RSI_WINDOW,
            rsi_smoothing: RsiSmoothing::default(),
            macd_fast: defaults::MACD_FAST,
            macd_slow: defaults::MACD_SLOW,
            macd_signal: defaults::MACD_SIGNAL,
            bollinger_window: defaults::BOLLINGER_WINDOW,
            bollinger_std_multiplier: defaults::BOLLINGER_STD_MULTIPLIER,
        }
    }
}

impl IndicatorParams {
    /// Reject windows the formulas cannot use.
    pub fn validate(&self) -> Result<()> {
        for (name, window) in [
            ("ma_window", self.ma_window),
            ("rsi_window", self.rsi_window),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ] {
            if window == 0 {
                return Err(ScopeError::InputValidation(format!("{name} must be at least 1")));
            }
        }
        if self.macd_fast >= self.macd_slow {
            return Err(ScopeError::InputValidation(format!(
                "macd_fast ({}) must be smaller than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        // Sample standard deviation needs two points.
        if self.bollinger_window < 2 {
            return Err(ScopeError::invalid("bollinger_window must be at least 2"));
        }
        if !self.bollinger_std_multiplier.is_finite() || self.bollinger_std_multiplier < 0.0 {
            return Err(ScopeError::InputValidation(format!(
                "bollinger_std_multiplier must be finite and non-negative, got {}",
                self.bollinger_std_multiplier
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Indicator values for one bar. `None` means the window is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_diff: Option<f64>,
    pub bollinger_high: Option<f64>,
    pub bollinger_low: Option<f64>,
}

/// A bar together with its indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBar {
    pub bar: PriceBar,
    pub indicators: IndicatorSet,
}

/// Output of [`compute_indicators`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSeries {
    params: IndicatorParams,
    rows: Vec<EnrichedBar>,
}

impl EnrichedSeries {
    /// Parameters the series was computed with.
    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// One row per input bar, oldest first.
    pub fn rows(&self) -> &[EnrichedBar] {
        &self.rows
    }

    /// Most recent row.
    pub fn latest(&self) -> &EnrichedBar {
        // Input was validated non-empty.
        &self.rows[self.rows.len() - 1]
    }

    /// Extract one indicator column.
    pub fn column(&self, pick: impl Fn(&IndicatorSet) -> Option<f64>) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| pick(&r.indicators)).collect()
    }

    /// All MACD crossovers in the series.
    pub fn macd_crossovers(&self) -> Vec<(usize, Crossover)> {
        macd_crossovers(&self.column(|i| i.macd_diff))
    }

    /// Crossover on the latest bar, if any.
    pub fn latest_crossover(&self) -> Option<Crossover> {
        let diff = self.column(|i| i.macd_diff);
        macd_crossover(&diff, diff.len().checked_sub(1)?)
    }

    /// RSI zone of the latest bar, if RSI is defined there.
    pub fn latest_rsi_zone(&self) -> Option<RsiZone> {
        self.latest().indicators.rsi.map(RsiZone::classify)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute the full indicator battery over `bars`.
///
/// # Errors
///
/// [`ScopeError::InputValidation`] when `bars` is empty, not strictly
/// time-ascending, or `params` fails [`IndicatorParams::validate`].
pub fn compute_indicators(bars: &[PriceBar], params: &IndicatorParams) -> Result<EnrichedSeries> {
    validate_bars(bars)?;
    params.validate()?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    if closes.len() < params.macd_slow.max(params.ma_window) {
        tracing::debug!(
            bars = closes.len(),
            "series shorter than indicator windows, leading values stay empty"
        );
    }

    let sma = moving_average::sma(&closes, params.ma_window);
    let ema = moving_average::ema(&closes, params.ma_window);
    let rsi = rsi::rsi(&closes, params.rsi_window, params.rsi_smoothing);
    let macd = macd::macd(
        &closes,
        params.macd_fast,
        params.macd_slow,
        params.macd_signal,
    );
    let bands = bollinger::bollinger(
        &closes,
        params.bollinger_window,
        params.bollinger_std_multiplier,
    );

    let rows = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| EnrichedBar {
            bar: *bar,
            indicators: IndicatorSet {
                sma: sma[i],
                ema: ema[i],
                rsi: rsi[i],
                macd: macd.macd[i],
                macd_signal: macd.signal[i],
                macd_diff: macd.diff[i],
                bollinger_high: bands.high[i],
                bollinger_low: bands.low[i],
            },
        })
        .collect();

    Ok(EnrichedSeries {
        params: *params,
        rows,
    })
}
