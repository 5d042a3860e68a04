//! Prediction domain — backend-generated price forecasts.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Start of the training window the forecast model expects; the predict
/// endpoint always receives this as `start_date`.
pub const TRAINING_WINDOW_START: &str = "2010-01-01";

/// One forecasted future price for a symbol.
///
/// Produced only by the prediction service. The forecast range starts after
/// the last historical date, so it never overlaps the historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(Vec<ValidationError>),
    /// The model emitted a price that is not a finite number.
    InvalidPrice { date: NaiveDate, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(errors) => {
                writeln!(f, "Forecast validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::InvalidPrice { date, value } => {
                write!(f, "Invalid price for {}: {}", date, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
