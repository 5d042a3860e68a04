//! Wishlist domain — the user's saved companies, persisted per user id.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use crate::shared::Symbol;

pub use state::WishlistState;

/// One saved company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistEntry {
    pub symbol: Symbol,
    pub name: String,
}

impl WishlistEntry {
    pub fn new(symbol: impl Into<Symbol>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

impl From<wire::WishlistEntryResponse> for WishlistEntry {
    fn from(raw: wire::WishlistEntryResponse) -> Self {
        Self {
            symbol: Symbol::from(raw.symbol),
            name: raw.name,
        }
    }
}

impl From<&WishlistEntry> for wire::WishlistEntryResponse {
    fn from(entry: &WishlistEntry) -> Self {
        Self {
            symbol: entry.symbol.as_str().to_string(),
            name: entry.name.clone(),
        }
    }
}
