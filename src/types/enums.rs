//! Shared enum types and their wire strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

// ---------------------------------------------------------------------------
// Option Side
// ---------------------------------------------------------------------------

/// Call or put side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    /// Call option (NSE `CE`).
    Call,
    /// Put option (NSE `PE`).
    Put,
}

impl OptionSide {
    /// NSE column prefix for this side.
    pub fn nse_code(self) -> &'static str {
        match self {
            Self::Call => "CE",
            Self::Put => "PE",
        }
    }
}

// ---------------------------------------------------------------------------
// Chart Range
// ---------------------------------------------------------------------------

/// Lookback period for a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartRange {
    #[serde(rename = "1mo")]
    OneMonth,
    #[default]
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl ChartRange {
    /// Query-string value understood by the chart API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
        }
    }
}

// ---------------------------------------------------------------------------
// Chart Interval
// ---------------------------------------------------------------------------

/// Bar size for a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartInterval {
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[default]
    #[serde(rename = "1d")]
    OneDay,
}

impl ChartInterval {
    /// Query-string value understood by the chart API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FifteenMinutes => "15m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
        }
    }
}

macro_rules! wire_str {
    ($ty:ty, $what:literal, [$($variant:ident),+]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ScopeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case(<$ty>::$variant.as_str()) {
                        return Ok(<$ty>::$variant);
                    }
                )+
                Err(ScopeError::InputValidation(format!(
                    concat!("unknown ", $what, ": {:?}"),
                    s
                )))
            }
        }
    };
}

wire_str!(ChartRange, "chart range", [OneMonth, ThreeMonths, SixMonths, OneYear]);
wire_str!(ChartInterval, "chart interval", [FifteenMinutes, OneHour, OneDay]);
