//! Fetch-adapter interface.
//!
//! [`MarketDataSource`] is the seam between data providers and everything
//! downstream: implementors hand back plain DTOs ([`PriceSeries`],
//! [`OptionChain`]) and the indicator engine and chain normalizer never see
//! HTTP. [`MarketClient`] is the network implementation; tests and offline
//! tools can supply their own.

use std::future::Future;

use crate::client::MarketClient;
use crate::error::Result;
use crate::types::bar::PriceSeries;
use crate::types::chart::Ticker;
use crate::types::enums::{ChartInterval, ChartRange};
use crate::types::option_chain::OptionChain;

/// A provider of price history and option chains.
pub trait MarketDataSource {
    /// OHLCV bars for `ticker`.
    fn fetch_price_series(
        &self,
        ticker: &Ticker,
        range: ChartRange,
        interval: ChartInterval,
    ) -> impl Future<Output = Result<PriceSeries>> + Send;

    /// Expiries available for an F&O underlying, nearest first.
    fn fetch_expiry_dates(&self, symbol: &str) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Option chain of `symbol` for `expiry`.
    fn fetch_option_chain(
        &self,
        symbol: &str,
        expiry: &str,
    ) -> impl Future<Output = Result<OptionChain>> + Send;
}

impl MarketDataSource for MarketClient {
    async fn fetch_price_series(
        &self,
        ticker: &Ticker,
        range: ChartRange,
        interval: ChartInterval,
    ) -> Result<PriceSeries> {
        self.get_chart(ticker, range, interval).await
    }

    async fn fetch_expiry_dates(&self, symbol: &str) -> Result<Vec<String>> {
        self.get_expiry_dates(symbol).await
    }

    async fn fetch_option_chain(&self, symbol: &str, expiry: &str) -> Result<OptionChain> {
        self.get_option_chain(symbol, expiry).await
    }
}
