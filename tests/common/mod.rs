#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};

use nse_scope::types::OptionSide;
use nse_scope::types::bar::PriceBar;
use nse_scope::types::option_chain::{OptionChain, OptionQuote, StrikeRow};

pub const EPS: f64 = 1e-9;

/// Daily bars with the given closes, starting 2024-01-01.
pub fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000 + i as u64,
        })
        .collect()
}

pub fn assert_close(actual: Option<f64>, expected: f64) {
    let a = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert!((a - expected).abs() < EPS, "expected {expected}, got {a}");
}

pub fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 26).unwrap()
}

pub fn call(strike: f64, ltp: Option<f64>, iv: Option<f64>) -> OptionQuote {
    OptionQuote {
        last_price: ltp,
        implied_volatility: iv,
        open_interest: Some(1_000.0),
        change_in_oi: Some(10.0),
        volume: Some(50),
        ..OptionQuote::empty(OptionSide::Call, strike)
    }
}

pub fn put(strike: f64, ltp: Option<f64>, iv: Option<f64>) -> OptionQuote {
    OptionQuote {
        last_price: ltp,
        implied_volatility: iv,
        ..OptionQuote::empty(OptionSide::Put, strike)
    }
}

/// Chain with one row per `(strike, call_ltp)`; puts mirror the call price.
pub fn chain_with_calls(rows: &[(f64, Option<f64>)]) -> OptionChain {
    let rows = rows
        .iter()
        .map(|&(strike, ltp)| StrikeRow {
            strike,
            call: Some(call(strike, ltp, Some(12.0))),
            put: Some(put(strike, ltp, Some(14.0))),
        })
        .collect();
    OptionChain::new("NIFTY", expiry(), None, rows).unwrap()
}
