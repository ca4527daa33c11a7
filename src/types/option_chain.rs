#![allow(missing_docs)]
//! Option chain types: per-side quotes, strike rows, the validated chain.
//!
//! Every market field on [`OptionQuote`] is optional: sources routinely omit
//! LTP/IV/OI for illiquid strikes and those gaps are carried through
//! normalization as `None` rather than dropped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScopeError};
use crate::types::enums::OptionSide;

/// One side (call or put) of one strike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub side: OptionSide,
    pub strike: f64,
    pub last_price: Option<f64>,
    /// Implied volatility in percent (NSE convention, e.g. `14.2`).
    pub implied_volatility: Option<f64>,
    pub open_interest: Option<f64>,
    pub change_in_oi: Option<f64>,
    pub volume: Option<u64>,
}

impl OptionQuote {
    /// A quote with only side and strike set.
    pub fn empty(side: OptionSide, strike: f64) -> Self {
        Self {
            side,
            strike,
            last_price: None,
            implied_volatility: None,
            open_interest: None,
            change_in_oi: None,
            volume: None,
        }
    }
}

/// Call and put quotes at a given strike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeRow {
    pub strike: f64,
    /// Call side (absent if no CE at this strike).
    pub call: Option<OptionQuote>,
    /// Put side (absent if no PE at this strike).
    pub put: Option<OptionQuote>,
}

impl StrikeRow {
    /// Quote for the given side, if present.
    pub fn quote(&self, side: OptionSide) -> Option<&OptionQuote> {
        match side {
            OptionSide::Call => self.call.as_ref(),
            OptionSide::Put => self.put.as_ref(),
        }
    }

    /// Call last traded price, if any.
    pub fn call_last_price(&self) -> Option<f64> {
        self.call.as_ref().and_then(|q| q.last_price)
    }
}

/// All strikes of one underlying for one expiry.
///
/// Strikes are unique, finite and positive, and stored in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionChain {
    underlying: String,
    expiry: NaiveDate,
    /// Underlying value reported by the source alongside the chain.
    underlying_value: Option<f64>,
    rows: Vec<StrikeRow>,
}

impl OptionChain {
    /// Build a chain, sorting rows by strike and validating them.
    pub fn new(
        underlying: impl Into<String>,
        expiry: NaiveDate,
        underlying_value: Option<f64>,
        mut rows: Vec<StrikeRow>,
    ) -> Result<Self> {
        for row in &rows {
            if !row.strike.is_finite() || row.strike <= 0.0 {
                return Err(ScopeError::InputValidation(format!(
                    "invalid strike {}",
                    row.strike
                )));
            }
            for (side, quote) in [(OptionSide::Call, &row.call), (OptionSide::Put, &row.put)] {
                if let Some(q) = quote {
                    if q.side != side || q.strike != row.strike {
                        return Err(ScopeError::InputValidation(format!(
                            "{} quote at strike {} filed under {:?} row {}",
                            q.side.nse_code(),
                            q.strike,
                            side,
                            row.strike
                        )));
                    }
                }
            }
        }

        rows.sort_by(|a, b| a.strike.total_cmp(&b.strike));
        if let Some(w) = rows.windows(2).find(|w| w[0].strike == w[1].strike) {
            return Err(ScopeError::InputValidation(format!(
                "duplicate strike {}",
                w[0].strike
            )));
        }

        Ok(Self {
            underlying: underlying.into(),
            expiry,
            underlying_value,
            rows,
        })
    }

    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    pub fn underlying_value(&self) -> Option<f64> {
        self.underlying_value
    }

    /// Rows in ascending strike order.
    pub fn rows(&self) -> &[StrikeRow] {
        &self.rows
    }

    /// Strikes in ascending order.
    pub fn strikes(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.strike)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
