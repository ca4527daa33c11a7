#![allow(missing_docs)]
//! Price bars and validated price series.

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScopeError};

/// One OHLCV observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// A strictly time-ascending run of [`PriceBar`]s for one instrument.
///
/// The constructor rejects empty input and out-of-order or duplicate
/// timestamps; after that the bars are only reachable as a slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, validating ordering.
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self> {
        validate_bars(&bars)?;
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// The instrument symbol this series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Most recent bar.
    pub fn latest(&self) -> &PriceBar {
        // Non-empty by construction.
        &self.bars[self.bars.len() - 1]
    }

    /// Close prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Consume the series, returning the bars.
    pub fn into_bars(self) -> Vec<PriceBar> {
        self.bars
    }
}

impl Deref for PriceSeries {
    type Target = [PriceBar];

    fn deref(&self) -> &Self::Target {
        &self.bars
    }
}

/// Check that `bars` is non-empty and strictly ascending by timestamp.
pub(crate) fn validate_bars(bars: &[PriceBar]) -> Result<()> {
    if bars.is_empty() {
        return Err(ScopeError::invalid("price series is empty"));
    }
    if let Some(i) = bars
        .windows(2)
        .position(|w| w[1].timestamp <= w[0].timestamp)
    {
        return Err(ScopeError::InputValidation(format!(
            "bars not strictly time-ordered at index {}: {} follows {}",
            i + 1,
            bars[i + 1].timestamp,
            bars[i].timestamp
        )));
    }
    Ok(())
}
