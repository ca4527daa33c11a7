//! # nse-scope
//!
//! Technical indicators and option-chain normalization for Indian equities
//! and indices.
//!
//! - [`indicators`]: SMA, EMA, RSI, MACD and Bollinger bands over a price series
//! - [`chain`]: ATM strike selection, strike-window filtering, Black-Scholes delta/gamma
//! - [`client`] / [`api`]: fetching NSE option chains and chart history
//! - [`source`]: the fetch-adapter trait the rest of the crate is written against
//! - [`watchlist`]: per-symbol technical overview with per-symbol error isolation
//!
//! ## Quick Start
//!
//! ```no_run
//! use nse_scope::chain::select_atm_and_filter;
//! use nse_scope::indicators::{compute_indicators, IndicatorParams};
//! use nse_scope::types::chart::Ticker;
//! use nse_scope::types::{ChartInterval, ChartRange};
//! use nse_scope::MarketClient;
//!
//! #[tokio::main]
//! async fn main() -> nse_scope::error::Result<()> {
//!     let client = MarketClient::new()?;
//!
//!     let series = client
//!         .get_chart(&Ticker::equity("TCS"), ChartRange::ThreeMonths, ChartInterval::OneDay)
//!         .await?;
//!     let enriched = compute_indicators(&series, &IndicatorParams::default())?;
//!     println!("{:?}", enriched.latest().indicators);
//!
//!     let expiries = client.get_expiry_dates("NIFTY").await?;
//!     let chain = client.get_option_chain("NIFTY", &expiries[0]).await?;
//!     let spot = chain.underlying_value().unwrap_or(f64::NAN);
//!     let window = select_atm_and_filter(&chain, spot, 5, 50.0)?;
//!     println!("ATM {}", window.atm_strike);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chain;
pub mod client;
pub mod constants;
pub mod error;
pub mod indicators;
pub mod source;
pub mod types;
pub mod watchlist;

/// Re-export the main client type at crate root for convenience.
pub use client::MarketClient;
/// Re-export the error type and Result alias.
pub use error::{Result, ScopeError};
/// Re-export the two core operations.
pub use chain::select_atm_and_filter;
pub use indicators::compute_indicators;
