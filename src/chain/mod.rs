//! Option-chain normalizer: ATM strike selection, windowing, highlight flags.
//!
//! ATM selection follows the dashboard heuristic: the ATM strike is the one
//! whose **call last price** is closest to the underlying price, not the
//! strike closest to the underlying. When no call price is usable the median
//! strike is taken instead.

pub mod greeks;

use serde::{Deserialize, Serialize};

use crate::constants::chain::{DEFAULT_STRIKE_STEP, DEFAULT_WINDOW_STRIKES, ELEVATED_IV};
use crate::error::{Result, ScopeError};
use crate::types::option_chain::{OptionChain, StrikeRow};

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// How many strikes to keep around the ATM strike, and how far apart they are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainWindow {
    /// Strike steps kept on each side of ATM.
    pub window_strikes: u32,
    /// Price distance between adjacent strikes.
    pub strike_step: f64,
}

impl Default for ChainWindow {
    fn default() -> Self {
        Self {
            window_strikes: DEFAULT_WINDOW_STRIKES,
            strike_step: DEFAULT_STRIKE_STEP,
        }
    }
}

impl ChainWindow {
    /// Inclusive strike bounds around `atm_strike`.
    pub fn bounds(&self, atm_strike: f64) -> (f64, f64) {
        let half = f64::from(self.window_strikes) * self.strike_step;
        (atm_strike - half, atm_strike + half)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A retained strike row with its presentation flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredRow {
    pub row: StrikeRow,
    /// This is the selected ATM strike.
    pub is_atm: bool,
    /// Call IV above the elevated threshold.
    pub call_iv_elevated: bool,
    /// Put IV above the elevated threshold.
    pub put_iv_elevated: bool,
}

/// The ATM strike and the rows inside its window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredChain {
    pub atm_strike: f64,
    pub underlying_price: f64,
    pub window: ChainWindow,
    /// Rows in ascending strike order.
    pub rows: Vec<FilteredRow>,
}

impl FilteredChain {
    /// The ATM row, if the ATM strike is an actual chain strike.
    pub fn atm_row(&self) -> Option<&FilteredRow> {
        self.rows.iter().find(|r| r.is_atm)
    }

    pub fn strikes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.row.strike).collect()
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Strike whose call last price is nearest to `underlying_price`.
///
/// Ties go to the lower strike. Falls back to [`median_strike`] when no row
/// has a finite call price or `underlying_price` is not finite.
///
/// # Errors
///
/// [`ScopeError::InputValidation`] for an empty chain.
pub fn select_atm_strike(chain: &OptionChain, underlying_price: f64) -> Result<f64> {
    if chain.is_empty() {
        return Err(ScopeError::InputValidation(format!(
            "option chain for {} {} has no strikes",
            chain.underlying(),
            chain.expiry()
        )));
    }

    let nearest = if underlying_price.is_finite() {
        chain
            .rows()
            .iter()
            .filter_map(|r| {
                let ltp = r.call_last_price().filter(|p| p.is_finite())?;
                Some((r.strike, (ltp - underlying_price).abs()))
            })
            // Rows are ascending, so keeping the first minimum breaks ties low.
            .fold(None, |best: Option<(f64, f64)>, cand| match best {
                Some(b) if b.1 <= cand.1 => Some(b),
                _ => Some(cand),
            })
    } else {
        None
    };

    match nearest {
        Some((strike, _)) => Ok(strike),
        None => {
            let median = median_strike(chain)?;
            tracing::debug!(
                underlying = chain.underlying(),
                median,
                "no usable call prices, ATM falls back to median strike"
            );
            Ok(median)
        }
    }
}

/// Median of the chain's strikes; the mean of the middle two for an even count.
pub fn median_strike(chain: &OptionChain) -> Result<f64> {
    let strikes: Vec<f64> = chain.strikes().collect();
    let n = strikes.len();
    if n == 0 {
        return Err(ScopeError::invalid("median of an empty chain"));
    }
    if n % 2 == 1 {
        Ok(strikes[n / 2])
    } else {
        Ok((strikes[n / 2 - 1] + strikes[n / 2]) / 2.0)
    }
}

/// Keep the rows within `window` of `atm_strike` and attach highlight flags.
///
/// Rows with missing price, IV or OI fields are kept as they are.
pub fn filter_window(
    chain: &OptionChain,
    atm_strike: f64,
    underlying_price: f64,
    window: ChainWindow,
) -> Result<FilteredChain> {
    if !window.strike_step.is_finite() || window.strike_step <= 0.0 {
        return Err(ScopeError::InputValidation(format!(
            "strike_step must be positive, got {}",
            window.strike_step
        )));
    }
    let (lo, hi) = window.bounds(atm_strike);

    let rows = chain
        .rows()
        .iter()
        .filter(|r| r.strike >= lo && r.strike <= hi)
        .map(|r| FilteredRow {
            is_atm: r.strike == atm_strike,
            call_iv_elevated: iv_elevated(r.call.as_ref().and_then(|q| q.implied_volatility)),
            put_iv_elevated: iv_elevated(r.put.as_ref().and_then(|q| q.implied_volatility)),
            row: r.clone(),
        })
        .collect();

    Ok(FilteredChain {
        atm_strike,
        underlying_price,
        window,
        rows,
    })
}

/// Select the ATM strike and filter the chain to `window_strikes` steps of
/// `strike_step` on either side of it.
pub fn select_atm_and_filter(
    chain: &OptionChain,
    underlying_price: f64,
    window_strikes: u32,
    strike_step: f64,
) -> Result<FilteredChain> {
    let atm = select_atm_strike(chain, underlying_price)?;
    filter_window(
        chain,
        atm,
        underlying_price,
        ChainWindow {
            window_strikes,
            strike_step,
        },
    )
}

fn iv_elevated(iv: Option<f64>) -> bool {
    iv.is_some_and(|v| v > ELEVATED_IV)
}
