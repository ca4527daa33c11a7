//! Constants for data sources, indicator defaults and chain classification.
//!
//! Base URLs are used internally by [`MarketClient`](crate::client::MarketClient);
//! the numeric defaults back the `Default` impls of the parameter structs but
//! are exported for callers that build their own.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the NSE public JSON API (option chains).
pub const NSE_BASE_URL: &str = "https://www.nseindia.com";

/// Base URL for the Yahoo Finance chart API (OHLCV history).
pub const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Browser-like user agent; NSE rejects requests without one.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Client-wide request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Suffix appended to NSE equity symbols for the chart API.
pub const NSE_EQUITY_SUFFIX: &str = ".NS";

// ---------------------------------------------------------------------------
// Indicator defaults
// ---------------------------------------------------------------------------

/// Indicator window defaults.
pub mod indicators {
    /// Window for SMA and EMA.
    pub const MA_WINDOW: usize = 20;
    /// Window for RSI.
    pub const RSI_WINDOW: usize = 14;
    /// Fast EMA period for MACD.
    pub const MACD_FAST: usize = 12;
    /// Slow EMA period for MACD.
    pub const MACD_SLOW: usize = 26;
    /// Signal EMA period for MACD.
    pub const MACD_SIGNAL: usize = 9;
    /// Window for Bollinger bands.
    pub const BOLLINGER_WINDOW: usize = 20;
    /// Standard-deviation multiplier for Bollinger bands.
    pub const BOLLINGER_STD_MULTIPLIER: f64 = 2.0;
    /// RSI strictly above this is overbought.
    pub const RSI_OVERBOUGHT: f64 = 70.0;
    /// RSI strictly below this is oversold.
    pub const RSI_OVERSOLD: f64 = 30.0;
}

// ---------------------------------------------------------------------------
// Option chain defaults
// ---------------------------------------------------------------------------

/// Option chain window and highlight defaults.
pub mod chain {
    /// Price distance between adjacent strikes.
    pub const DEFAULT_STRIKE_STEP: f64 = 50.0;
    /// Strikes kept on each side of the ATM strike.
    pub const DEFAULT_WINDOW_STRIKES: u32 = 5;
    /// IV (in percent) strictly above this is flagged as elevated.
    pub const ELEVATED_IV: f64 = 30.0;
    /// Day count used to convert days-to-expiry into years.
    pub const DAYS_PER_YEAR: f64 = 365.0;
    /// Date format used by NSE for expiries (e.g. `26-Dec-2024`).
    pub const NSE_EXPIRY_FORMAT: &str = "%d-%b-%Y";
}

// ---------------------------------------------------------------------------
// Instruments
// ---------------------------------------------------------------------------

/// Display name → chart symbol for the tracked indices.
pub const INDICES: &[(&str, &str)] = &[
    ("NIFTY 50", "^NSEI"),
    ("NIFTY BANK", "^NSEBANK"),
    ("NIFTY IT", "^CNXIT"),
    ("NIFTY FMCG", "^CNXFMCG"),
    ("NIFTY AUTO", "^CNXAUTO"),
    ("NIFTY METAL", "^CNXMETAL"),
    ("NIFTY PHARMA", "^CNXPHARMA"),
    ("SENSEX", "^BSESN"),
];

/// Index symbols offered for the F&O option chain.
pub const FO_INDICES: &[&str] = &[
    "NIFTY",
    "BANKNIFTY",
    "NIFTY IT",
    "NIFTY FMCG",
    "NIFTY AUTO",
    "NIFTY METAL",
    "NIFTY PHARMA",
    "SENSEX",
    "NIFTY FIN SERVICE",
];
