//! Company profile domain — descriptive data from the profile provider.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod state;
pub mod wire;

use crate::shared::Symbol;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub use state::ProfileState;

/// Descriptive company data as served by the profile provider.
///
/// Only `symbol` and `company_name` are guaranteed; the provider omits the
/// rest freely, so everything else is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub symbol: Symbol,
    pub company_name: String,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub industry: Option<String>,
    pub sector: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub ceo: Option<String>,
    pub full_time_employees: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub ipo_date: Option<NaiveDate>,
    pub avg_volume: Option<u64>,
    pub market_cap: Option<Decimal>,
    pub range_52w: Option<String>,
    pub beta: Option<Decimal>,
    pub last_dividend: Option<Decimal>,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Multiple(Vec<ValidationError>),
    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: f64 },
    InvalidDate { field: &'static str, value: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Multiple(errors) => {
                write!(f, "multiple validation errors: [")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", e)?;
                }
                write!(f, "]")
            }
            Self::MissingField(field) => write!(f, "missing required field: {}", field),
            Self::InvalidNumber { field, value } => {
                write!(f, "invalid number for {}: {}", field, value)
            }
            Self::InvalidDate { field, value } => {
                write!(f, "invalid date for {}: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
