#![allow(missing_docs)]
//! NSE option-chain wire types: `records`, per-strike `CE`/`PE` legs.
//!
//! Mirrors the payload of `GET /api/option-chain-indices?symbol=…`. Only the
//! fields the normalizer consumes are modelled; unknown fields are ignored.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::constants::chain::NSE_EXPIRY_FORMAT;
use crate::error::{Result, ScopeError};
use crate::types::enums::OptionSide;
use crate::types::option_chain::{OptionChain, OptionQuote, StrikeRow};

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Response from `GET /api/option-chain-indices`.
#[derive(Debug, Clone, Deserialize)]
pub struct NseOptionChainResponse {
    pub records: NseRecords,
}

/// All expiries of the underlying, flattened into one list of strike entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NseRecords {
    /// Expiry dates in `DD-Mon-YYYY`, nearest first.
    #[serde(default)]
    pub expiry_dates: Vec<String>,
    #[serde(default)]
    pub data: Vec<NseStrikeEntry>,
    #[serde(default)]
    pub underlying_value: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One (strike, expiry) pair with its optional call and put legs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NseStrikeEntry {
    pub strike_price: f64,
    pub expiry_date: String,
    #[serde(rename = "CE", default)]
    pub ce: Option<NseLeg>,
    #[serde(rename = "PE", default)]
    pub pe: Option<NseLeg>,
}

/// Market data for one leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NseLeg {
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<f64>,
    #[serde(default, rename = "changeinOpenInterest")]
    pub change_in_open_interest: Option<f64>,
    #[serde(default)]
    pub total_traded_volume: Option<u64>,
}

impl NseLeg {
    fn into_quote(self, side: OptionSide, strike: f64) -> OptionQuote {
        OptionQuote {
            side,
            strike,
            last_price: self.last_price,
            implied_volatility: self.implied_volatility,
            open_interest: self.open_interest,
            change_in_oi: self.change_in_open_interest,
            volume: self.total_traded_volume,
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Parse an NSE expiry string such as `26-Dec-2024`.
pub fn parse_expiry(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), NSE_EXPIRY_FORMAT).map_err(|e| {
        ScopeError::InputValidation(format!("unparseable expiry {raw:?}: {e}"))
    })
}

impl NseRecords {
    /// Keep the entries for `expiry` and normalize them into an [`OptionChain`].
    ///
    /// `expiry` is matched against the raw `expiryDate` string, as returned
    /// in [`expiry_dates`](Self::expiry_dates).
    pub fn into_chain(self, symbol: &str, expiry: &str) -> Result<OptionChain> {
        let expiry_date = parse_expiry(expiry)?;

        let rows = self
            .data
            .into_iter()
            .filter(|d| d.expiry_date == expiry)
            .map(|d| StrikeRow {
                strike: d.strike_price,
                call: d.ce.map(|leg| leg.into_quote(OptionSide::Call, d.strike_price)),
                put: d.pe.map(|leg| leg.into_quote(OptionSide::Put, d.strike_price)),
            })
            .collect();

        OptionChain::new(symbol, expiry_date, self.underlying_value, rows)
    }
}
