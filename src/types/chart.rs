#![allow(missing_docs)]
//! Chart (OHLCV history) wire types and request helpers.

use chrono::DateTime;
use serde::Deserialize;

use crate::constants::NSE_EQUITY_SUFFIX;
use crate::error::{ProviderErrorBody, Result, ScopeError};
use crate::types::bar::{PriceBar, PriceSeries};

// ---------------------------------------------------------------------------
// Ticker
// ---------------------------------------------------------------------------

/// A chart symbol, e.g. `RELIANCE.NS` or `^NSEI`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// NSE equity: upper-cased with the `.NS` suffix appended.
    pub fn equity(symbol: &str) -> Self {
        Self(format!(
            "{}{}",
            symbol.trim().to_uppercase(),
            NSE_EQUITY_SUFFIX
        ))
    }

    /// Index by display name (`"NIFTY 50"` → `^NSEI`), see [`INDICES`](crate::constants::INDICES).
    pub fn index(name: &str) -> Option<Self> {
        crate::constants::INDICES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(_, sym)| Self((*sym).to_owned()))
    }

    /// Use the symbol verbatim.
    pub fn raw(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a comma-separated watchlist (`"RELIANCE, tcs,INFY"`) into tickers.
///
/// Blank entries are skipped.
pub fn parse_watchlist(input: &str) -> Vec<Ticker> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Ticker::equity)
        .collect()
}

// ---------------------------------------------------------------------------
// Chart Response
// ---------------------------------------------------------------------------

/// Response from `GET /v8/finance/chart/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ProviderErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: Option<ChartMeta>,
    /// Epoch timestamps (seconds).
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub regular_market_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartIndicators {
    pub quote: Vec<ChartQuote>,
}

/// OHLCV columns.
///
/// Each field is a parallel array; index `i` across all arrays corresponds
/// to the same bar. Entries are `null` for bars with no trades.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartQuote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartResponse {
    /// Convert into a validated [`PriceSeries`].
    ///
    /// Bars with any missing OHLC value are skipped; a missing volume reads
    /// as zero.
    pub fn into_series(self, symbol: &str) -> Result<PriceSeries> {
        if let Some(err) = self.chart.error {
            return Err(ScopeError::Provider(err));
        }
        let result = self
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| ScopeError::invalid(format!("no chart data for {symbol}")))?;
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ScopeError::invalid(format!("no quote columns for {symbol}")))?;

        let mut bars = Vec::with_capacity(result.timestamp.len());
        for (i, &ts) in result.timestamp.iter().enumerate() {
            let at = |col: &[Option<f64>]| col.get(i).copied().flatten();
            let (Some(open), Some(high), Some(low), Some(close)) = (
                at(&quote.open),
                at(&quote.high),
                at(&quote.low),
                at(&quote.close),
            ) else {
                tracing::debug!(symbol, index = i, "skipping bar with missing OHLC");
                continue;
            };
            let timestamp = DateTime::from_timestamp(ts, 0).ok_or_else(|| {
                ScopeError::InputValidation(format!("timestamp {ts} out of range"))
            })?;
            bars.push(PriceBar {
                timestamp,
                open,
                high,
                low,
                close,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
            });
        }

        PriceSeries::new(symbol, bars)
    }
}
