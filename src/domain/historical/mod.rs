//! Historical series domain — daily OHLCV records for a symbol.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One realized trading session for a symbol.
///
/// Immutable once produced from a response. A series is always ordered
/// ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl PricePoint {
    /// Intraday move of this session, close against open, in percent.
    /// `None` when the open is zero.
    pub fn change_percent(&self) -> Option<Decimal> {
        if self.open.is_zero() {
            return None;
        }
        Some((self.close - self.open) / self.open * Decimal::from(100))
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(Vec<ValidationError>),
    /// A mapping key that is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(errors) => {
                writeln!(f, "Historical series validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::InvalidDate(raw) => write!(f, "Invalid date key: {:?}", raw),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_percent() {
        let point = PricePoint {
            date: "2025-08-25".parse().unwrap(),
            open: Decimal::from(200),
            high: Decimal::from(212),
            low: Decimal::from(198),
            close: Decimal::from(210),
            volume: 48_217_355,
        };
        assert_eq!(point.change_percent(), Some(Decimal::from(5)));
    }

    #[test]
    fn test_change_percent_zero_open() {
        let point = PricePoint {
            date: "2025-08-25".parse().unwrap(),
            open: Decimal::ZERO,
            high: Decimal::ZERO,
            low: Decimal::ZERO,
            close: Decimal::ZERO,
            volume: 0,
        };
        assert_eq!(point.change_percent(), None);
    }
}
