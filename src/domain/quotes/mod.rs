//! Quotes domain — latest-session snapshots for the market overview.
//!
//! The two-day endpoint serves the same mapping shape as the historical
//! one, so this domain reuses the historical wire and conversion code and
//! only adds the overview assembly on top.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::historical::PricePoint;
use crate::shared::Symbol;
use rust_decimal::Decimal;

/// Companies shown in the market overview table, `(symbol, display name)`.
pub const TOP_COMPANIES: [(&str, &str); 5] = [
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("NVDA", "NVIDIA Corporation"),
];

/// One row of the market overview table.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOverviewEntry {
    pub symbol: Symbol,
    pub name: String,
    /// Most recent completed session.
    pub latest: PricePoint,
}

impl MarketOverviewEntry {
    /// Intraday move of the latest session, in percent.
    pub fn change_percent(&self) -> Option<Decimal> {
        self.latest.change_percent()
    }
}
