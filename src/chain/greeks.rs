//! Black-Scholes delta and gamma.
//!
//! ```text
//! d1    = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! Δcall = Φ(d1)        Δput = Φ(d1) − 1
//! Γ     = φ(d1) / (S·σ·√T)
//! ```
//!
//! Degenerate inputs are rejected with [`ScopeError::Domain`] instead of
//! letting NaN or infinity reach the caller.

// Black-Scholes uses standard mathematical notation (s, k, t, r, sigma)
#![allow(clippy::many_single_char_names)]

use std::f64::consts::{PI, SQRT_2};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FilteredChain;
use crate::constants::chain::DAYS_PER_YEAR;
use crate::error::{Result, ScopeError};
use crate::types::enums::OptionSide;

/// Inputs for one contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreeksInput {
    /// Spot price of the underlying.
    pub spot: f64,
    pub strike: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
    /// Annualized risk-free rate as a decimal.
    pub rate: f64,
    /// Volatility as a decimal (0.2 = 20%).
    pub volatility: f64,
}

impl GreeksInput {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_expiry", self.time_to_expiry),
            ("rate", self.rate),
            ("volatility", self.volatility),
        ];
        if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScopeError::Domain(format!("{name} is not finite ({v})")));
        }
        if let Some((name, v)) = fields
            .iter()
            .filter(|(name, _)| *name != "rate")
            .find(|(_, v)| *v <= 0.0)
        {
            return Err(ScopeError::Domain(format!("{name} must be positive, got {v}")));
        }
        Ok(())
    }

    /// The Black-Scholes `d1` term.
    pub fn d1(&self) -> Result<f64> {
        self.validate()?;
        let Self {
            spot: s,
            strike: k,
            time_to_expiry: t,
            rate: r,
            volatility: sigma,
        } = *self;
        Ok(((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt()))
    }
}

/// Delta and gamma of one contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
}

/// Delta and gamma for `side`.
///
/// # Errors
///
/// [`ScopeError::Domain`] when any input is non-finite, or spot, strike,
/// time or volatility is not positive.
pub fn compute_greeks(input: &GreeksInput, side: OptionSide) -> Result<Greeks> {
    let d1 = input.d1()?;
    let cdf = norm_cdf(d1);
    let delta = match side {
        OptionSide::Call => cdf,
        OptionSide::Put => cdf - 1.0,
    };
    let gamma =
        norm_pdf(d1) / (input.spot * input.volatility * input.time_to_expiry.sqrt());

    if !delta.is_finite() || !gamma.is_finite() {
        return Err(ScopeError::Domain(format!(
            "greeks not finite for {input:?} (delta {delta}, gamma {gamma})"
        )));
    }
    Ok(Greeks { delta, gamma })
}

/// Years from `as_of` to `expiry` on an ACT/365 basis.
pub fn years_to_expiry(as_of: NaiveDate, expiry: NaiveDate) -> f64 {
    (expiry - as_of).num_days() as f64 / DAYS_PER_YEAR
}

// ---------------------------------------------------------------------------
// Chain annotation
// ---------------------------------------------------------------------------

/// Greeks for both sides of one retained strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowGreeks {
    pub strike: f64,
    pub call: Option<Greeks>,
    pub put: Option<Greeks>,
}

/// Greeks for every contract of a filtered chain.
///
/// Each quote's IV is read as a percentage. Quotes with no IV or an IV of
/// zero or less (NSE reports `0` for untraded strikes) get `None`.
///
/// # Errors
///
/// [`ScopeError::Domain`] when the chain has expired relative to `as_of`,
/// or `spot`/`rate` are unusable.
pub fn annotate_greeks(
    filtered: &FilteredChain,
    expiry: NaiveDate,
    spot: f64,
    rate: f64,
    as_of: NaiveDate,
) -> Result<Vec<RowGreeks>> {
    let t = years_to_expiry(as_of, expiry);
    if t <= 0.0 {
        return Err(ScopeError::Domain(format!(
            "chain expiring {expiry} has no time value on {as_of}"
        )));
    }

    filtered
        .rows
        .iter()
        .map(|fr| {
            let strike = fr.row.strike;
            let side_greeks = |side: OptionSide| -> Result<Option<Greeks>> {
                let Some(iv) = fr
                    .row
                    .quote(side)
                    .and_then(|q| q.implied_volatility)
                    .filter(|iv| *iv > 0.0)
                else {
                    return Ok(None);
                };
                let input = GreeksInput {
                    spot,
                    strike,
                    time_to_expiry: t,
                    rate,
                    volatility: iv / 100.0,
                };
                compute_greeks(&input, side).map(Some)
            };
            Ok(RowGreeks {
                strike,
                call: side_greeks(OptionSide::Call)?,
                put: side_greeks(OptionSide::Put)?,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Normal distribution
// ---------------------------------------------------------------------------

/// Standard normal CDF via the error function.
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Standard normal PDF.
fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
