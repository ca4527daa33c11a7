//! REST endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`MarketClient`](crate::client::MarketClient) via `impl` blocks. All
//! methods handle URL construction, HTTP transport, JSON decoding and
//! normalization into the crate's DTOs.
//!
//! ## Usage
//!
//! ```no_run
//! use nse_scope::MarketClient;
//! use nse_scope::types::chart::Ticker;
//! use nse_scope::types::{ChartInterval, ChartRange};
//!
//! # #[tokio::main]
//! # async fn main() -> nse_scope::Result<()> {
//! let client = MarketClient::new()?;
//! let series = client
//!     .get_chart(&Ticker::equity("RELIANCE"), ChartRange::ThreeMonths, ChartInterval::OneDay)
//!     .await?;
//! let expiries = client.get_expiry_dates("NIFTY").await?;
//! let chain = client.get_option_chain("NIFTY", &expiries[0]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`historical`] | 1 | OHLCV chart history |
//! | [`option_chain`] | 1 | Option chain records, expiries, normalized chain |

pub mod historical;
pub mod option_chain;
