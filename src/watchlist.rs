//! Per-symbol technical overview.
//!
//! [`load_watchlist`] fetches and enriches each ticker in turn. A failure on
//! one symbol is recorded on its [`WatchlistEntry`] and logged; the rest of
//! the list is still processed.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::indicators::{Crossover, EnrichedSeries, IndicatorParams, RsiZone, compute_indicators};
use crate::source::MarketDataSource;
use crate::types::bar::PriceSeries;
use crate::types::chart::Ticker;
use crate::types::enums::{ChartInterval, ChartRange};

/// Latest-bar summary of an enriched series.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub symbol: String,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    pub rsi: Option<f64>,
    pub rsi_zone: Option<RsiZone>,
    /// Crossover on the latest bar.
    pub crossover: Option<Crossover>,
    /// Most recent crossover anywhere in the series.
    pub last_crossover: Option<(DateTime<Utc>, Crossover)>,
    pub enriched: EnrichedSeries,
}

impl Snapshot {
    /// Enrich `series` and summarize its latest bar.
    pub fn from_series(series: &PriceSeries, params: &IndicatorParams) -> Result<Self> {
        let enriched = compute_indicators(series, params)?;
        let latest = *enriched.latest();
        let last_crossover = enriched
            .macd_crossovers()
            .last()
            .map(|&(i, c)| (enriched.rows()[i].bar.timestamp, c));

        Ok(Self {
            symbol: series.symbol().to_owned(),
            close: latest.bar.close,
            high: latest.bar.high,
            low: latest.bar.low,
            volume: latest.bar.volume,
            rsi: latest.indicators.rsi,
            rsi_zone: enriched.latest_rsi_zone(),
            crossover: enriched.latest_crossover(),
            last_crossover,
            enriched,
        })
    }
}

/// Outcome for one ticker.
#[derive(Debug)]
pub struct WatchlistEntry {
    pub ticker: Ticker,
    pub outcome: Result<Snapshot>,
}

/// Fetch, enrich and summarize every ticker, in order.
pub async fn load_watchlist<S: MarketDataSource>(
    source: &S,
    tickers: &[Ticker],
    range: ChartRange,
    interval: ChartInterval,
    params: &IndicatorParams,
) -> Vec<WatchlistEntry> {
    let mut entries = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        let outcome = match source.fetch_price_series(ticker, range, interval).await {
            Ok(series) => Snapshot::from_series(&series, params),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            tracing::warn!(ticker = %ticker, error = %e, "skipping symbol");
        }
        entries.push(WatchlistEntry {
            ticker: ticker.clone(),
            outcome,
        });
    }
    entries
}
