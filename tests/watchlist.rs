//! Watchlist loading over an in-memory source, plus ticker and wire-string
//! parsing.

mod common;

use std::collections::HashMap;

use common::bars_from_closes;

use nse_scope::error::{Result, ScopeError};
use nse_scope::indicators::{Crossover, IndicatorParams, RsiZone};
use nse_scope::source::MarketDataSource;
use nse_scope::types::bar::PriceSeries;
use nse_scope::types::chart::{Ticker, parse_watchlist};
use nse_scope::types::option_chain::OptionChain;
use nse_scope::types::{ChartInterval, ChartRange};
use nse_scope::watchlist::{Snapshot, load_watchlist};

/// Serves canned closes per symbol; anything else is a provider miss.
struct FakeSource {
    closes: HashMap<String, Vec<f64>>,
}

impl FakeSource {
    fn new(entries: &[(&str, Vec<f64>)]) -> Self {
        Self {
            closes: entries
                .iter()
                .map(|(s, c)| ((*s).to_owned(), c.clone()))
                .collect(),
        }
    }
}

impl MarketDataSource for FakeSource {
    async fn fetch_price_series(
        &self,
        ticker: &Ticker,
        _range: ChartRange,
        _interval: ChartInterval,
    ) -> Result<PriceSeries> {
        let closes = self
            .closes
            .get(ticker.as_str())
            .ok_or_else(|| ScopeError::InputValidation(format!("no data for {ticker}")))?;
        PriceSeries::new(ticker.as_str(), bars_from_closes(closes))
    }

    async fn fetch_expiry_dates(&self, _symbol: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn fetch_option_chain(&self, symbol: &str, _expiry: &str) -> Result<OptionChain> {
        Err(ScopeError::InputValidation(format!("no chain for {symbol}")))
    }
}

fn rally() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
    closes.extend((0..15).map(|i| 161.0 + 3.0 * i as f64));
    closes
}

// ===================================================================
// load_watchlist
// ===================================================================

#[tokio::test]
async fn one_failing_symbol_does_not_stop_the_rest() {
    let source = FakeSource::new(&[
        ("RELIANCE.NS", rally()),
        ("TCS.NS", vec![3_900.0, 3_912.5, 3_887.0]),
    ]);
    let tickers = parse_watchlist("RELIANCE, NOSUCH, tcs");

    let entries = load_watchlist(
        &source,
        &tickers,
        ChartRange::default(),
        ChartInterval::default(),
        &IndicatorParams::default(),
    )
    .await;

    let order: Vec<&str> = entries.iter().map(|e| e.ticker.as_str()).collect();
    assert_eq!(order, vec!["RELIANCE.NS", "NOSUCH.NS", "TCS.NS"]);
    assert!(entries[0].outcome.is_ok());
    assert!(matches!(entries[1].outcome, Err(ScopeError::InputValidation(_))));

    let tcs = entries[2].outcome.as_ref().unwrap();
    assert_eq!(tcs.close, 3_887.0);
    assert_eq!(tcs.rsi, None);
    assert_eq!(tcs.rsi_zone, None);
    assert_eq!(tcs.crossover, None);
}

#[tokio::test]
async fn empty_watchlist_yields_nothing() {
    let source = FakeSource::new(&[]);
    let entries = load_watchlist(
        &source,
        &[],
        ChartRange::OneMonth,
        ChartInterval::OneDay,
        &IndicatorParams::default(),
    )
    .await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn invalid_params_fail_every_symbol() {
    let source = FakeSource::new(&[("INFY.NS", rally())]);
    let params = IndicatorParams {
        rsi_window: 0,
        ..IndicatorParams::default()
    };
    let entries = load_watchlist(
        &source,
        &[Ticker::equity("infy")],
        ChartRange::OneMonth,
        ChartInterval::OneDay,
        &params,
    )
    .await;
    assert!(matches!(entries[0].outcome, Err(ScopeError::InputValidation(_))));
}

// ===================================================================
// Snapshot
// ===================================================================

#[test]
fn snapshot_summarizes_the_latest_bar() {
    let closes = rally();
    let series = PriceSeries::new("RELIANCE.NS", bars_from_closes(&closes)).unwrap();
    let snap = Snapshot::from_series(&series, &IndicatorParams::default()).unwrap();

    let last = closes[closes.len() - 1];
    assert_eq!(snap.symbol, "RELIANCE.NS");
    assert_eq!(snap.close, last);
    assert_eq!(snap.high, last + 1.0);
    assert_eq!(snap.low, last - 1.0);
    assert_eq!(snap.volume, 1_000 + closes.len() as u64 - 1);
    assert_eq!(snap.rsi_zone, Some(RsiZone::Overbought));
    assert_eq!(snap.rsi, snap.enriched.latest().indicators.rsi);

    let expected_last = snap
        .enriched
        .macd_crossovers()
        .last()
        .map(|&(i, c)| (snap.enriched.rows()[i].bar.timestamp, c));
    assert_eq!(snap.last_crossover, expected_last);
    if let Some((_, c)) = snap.last_crossover {
        assert_eq!(c, Crossover::Bullish);
    }
}

// ===================================================================
// Tickers and wire strings
// ===================================================================

#[test]
fn equity_tickers_get_the_nse_suffix() {
    assert_eq!(Ticker::equity(" reliance ").as_str(), "RELIANCE.NS");
    assert_eq!(Ticker::raw("^NSEI").to_string(), "^NSEI");
}

#[test]
fn index_tickers_resolve_by_display_name() {
    assert_eq!(Ticker::index("NIFTY 50").unwrap().as_str(), "^NSEI");
    assert_eq!(Ticker::index("nifty bank").unwrap().as_str(), "^NSEBANK");
    assert!(Ticker::index("NIFTY 5000").is_none());
}

#[test]
fn watchlist_parsing_skips_blanks() {
    let tickers = parse_watchlist("RELIANCE,, tcs ,INFY,");
    let symbols: Vec<&str> = tickers.iter().map(Ticker::as_str).collect();
    assert_eq!(symbols, vec!["RELIANCE.NS", "TCS.NS", "INFY.NS"]);
    assert!(parse_watchlist("  ").is_empty());
}

#[test]
fn chart_range_and_interval_parse_wire_strings() {
    assert_eq!("3mo".parse::<ChartRange>().unwrap(), ChartRange::ThreeMonths);
    assert_eq!("1Y".parse::<ChartRange>().unwrap(), ChartRange::OneYear);
    assert_eq!("15m".parse::<ChartInterval>().unwrap(), ChartInterval::FifteenMinutes);
    assert_eq!(ChartInterval::OneHour.to_string(), "1h");
    assert!(matches!(
        "2w".parse::<ChartRange>(),
        Err(ScopeError::InputValidation(_))
    ));
}
