//! Data types shared by the indicator engine, the chain normalizer and the
//! fetch layer.
//!
//! ## Organization
//!
//! - [`enums`]: Option side, chart range and interval
//! - [`bar`]: Price bars and the validated [`PriceSeries`](bar::PriceSeries)
//! - [`option_chain`]: Option quotes, strike rows and the validated chain
//! - [`nse`]: NSE option-chain wire format and its normalization
//! - [`chart`]: Chart (OHLCV) wire format, tickers and watchlist parsing
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod bar;
pub mod chart;
pub mod enums;
pub mod nse;
pub mod option_chain;

pub use enums::*;
