//! Shared newtypes and enums used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for stock ticker symbols (e.g. `"AAPL"`, `"RELIANCE.NS"`).
///
/// Stored exactly as given; the backend upper-cases on its side. Suffixed
/// symbols (`.NS`, `.BSE`) are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── UserId ──────────────────────────────────────────────────────────────────

/// Opaque identifier of the signed-in user, as minted by the auth provider.
///
/// The SDK never inspects it; it only keys server-side wishlist storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── TimeRange ───────────────────────────────────────────────────────────────

/// Historical window selector for the chart.
///
/// The backend maps these to calendar windows on its side (a `1M` request
/// returns roughly the last 39 sessions); the client treats whatever window
/// comes back as authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1W")]
    Week1,
    #[default]
    #[serde(rename = "1M")]
    Month1,
    #[serde(rename = "3M")]
    Month3,
    #[serde(rename = "1Y")]
    Year1,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week1 => "1W",
            Self::Month1 => "1M",
            Self::Month3 => "3M",
            Self::Year1 => "1Y",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── ChartType ───────────────────────────────────────────────────────────────

/// Chart representation the derived dataset is shaped for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Pie,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── PredictionHorizon ───────────────────────────────────────────────────────

/// Length of the forecast window requested from the prediction service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionHorizon {
    #[default]
    #[serde(rename = "1M")]
    Month1,
    #[serde(rename = "2M")]
    Month2,
    #[serde(rename = "3M")]
    Month3,
    #[serde(rename = "6M")]
    Month6,
}

impl PredictionHorizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month1 => "1M",
            Self::Month2 => "2M",
            Self::Month3 => "3M",
            Self::Month6 => "6M",
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            Self::Month1 => 1,
            Self::Month2 => 2,
            Self::Month3 => 3,
            Self::Month6 => 6,
        }
    }

    /// Forecast length in days as the prediction endpoint counts them
    /// (calendar months approximated at 30 days).
    pub fn days(&self) -> u32 {
        self.months() * 30
    }
}

impl std::fmt::Display for PredictionHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
