//! Historical Data endpoint: OHLCV bars from the chart API.

use crate::client::MarketClient;
use crate::error::Result;
use crate::types::bar::PriceSeries;
use crate::types::chart::{ChartResponse, Ticker};
use crate::types::enums::{ChartInterval, ChartRange};

impl MarketClient {
    /// Retrieve OHLCV bars for `ticker` over `range` at `interval`.
    ///
    /// Bars with missing OHLC values (no trades) are skipped.
    ///
    /// **Endpoint:** `GET /v8/finance/chart/{symbol}?range={range}&interval={interval}`
    pub async fn get_chart(
        &self,
        ticker: &Ticker,
        range: ChartRange,
        interval: ChartInterval,
    ) -> Result<PriceSeries> {
        let url = self.chart_url(
            &format!("/v8/finance/chart/{}", ticker.as_str()),
            &[("range", range.as_str()), ("interval", interval.as_str())],
        )?;
        let resp: ChartResponse = self.get(url).await?;
        resp.into_series(ticker.as_str())
    }
}
