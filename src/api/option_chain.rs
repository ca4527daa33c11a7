//! Option Chain endpoints: raw NSE records, expiry list, normalized chain.

use crate::client::MarketClient;
use crate::error::Result;
use crate::types::nse::{NseOptionChainResponse, NseRecords};
use crate::types::option_chain::OptionChain;

impl MarketClient {
    /// Retrieve the full NSE option-chain payload for an index, across all
    /// expiries.
    ///
    /// **Endpoint:** `GET /api/option-chain-indices?symbol={symbol}`
    pub async fn get_option_chain_indices(&self, symbol: &str) -> Result<NseRecords> {
        let url = self.nse_url("/api/option-chain-indices", &[("symbol", symbol)])?;
        let resp: NseOptionChainResponse = self.get(url).await?;
        Ok(resp.records)
    }

    /// Retrieve the active expiry dates (`DD-Mon-YYYY`, nearest first).
    ///
    /// **Endpoint:** `GET /api/option-chain-indices?symbol={symbol}`
    pub async fn get_expiry_dates(&self, symbol: &str) -> Result<Vec<String>> {
        Ok(self.get_option_chain_indices(symbol).await?.expiry_dates)
    }

    /// Retrieve the option chain of `symbol` for one `expiry`, normalized.
    ///
    /// `expiry` must be one of the strings returned by
    /// [`get_expiry_dates`](Self::get_expiry_dates).
    ///
    /// **Endpoint:** `GET /api/option-chain-indices?symbol={symbol}`
    pub async fn get_option_chain(&self, symbol: &str, expiry: &str) -> Result<OptionChain> {
        let records = self.get_option_chain_indices(symbol).await?;
        let chain = records.into_chain(symbol, expiry)?;
        tracing::debug!(symbol, expiry, strikes = chain.len(), "option chain loaded");
        Ok(chain)
    }
}
