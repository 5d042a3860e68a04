//! Wishlist state container — app-owned, SDK-provided update logic.

use crate::domain::wishlist::WishlistEntry;
use crate::shared::Symbol;

/// The user's wishlist as held client-side between views.
///
/// `fetched` distinguishes "never loaded" from "loaded and empty" so the
/// app does not refetch on every view switch.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    entries: Vec<WishlistEntry>,
    fetched: bool,
}

impl WishlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.entries.iter().any(|e| &e.symbol == symbol)
    }

    /// Replace the whole list with what the backend returned.
    pub fn replace(&mut self, entries: Vec<WishlistEntry>) {
        self.entries = entries;
        self.fetched = true;
    }

    /// Add a company unless its symbol is already present. Returns whether
    /// the list changed.
    pub fn add(&mut self, entry: WishlistEntry) -> bool {
        if self.contains(&entry.symbol) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove a company by symbol. Returns whether the list changed.
    pub fn remove(&mut self, symbol: &Symbol) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.symbol != symbol);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str, name: &str) -> WishlistEntry {
        WishlistEntry::new(symbol, name)
    }

    #[test]
    fn test_add_dedupes_by_symbol() {
        let mut state = WishlistState::new();
        assert!(state.add(entry("AAPL", "Apple Inc.")));
        assert!(!state.add(entry("AAPL", "Apple, but again")));
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].name, "Apple Inc.");
    }

    #[test]
    fn test_remove_by_symbol() {
        let mut state = WishlistState::new();
        state.add(entry("AAPL", "Apple Inc."));
        state.add(entry("MSFT", "Microsoft Corporation"));

        assert!(state.remove(&Symbol::from("AAPL")));
        assert!(!state.remove(&Symbol::from("AAPL")));
        assert_eq!(state.entries().len(), 1);
        assert!(state.contains(&Symbol::from("MSFT")));
    }

    #[test]
    fn test_replace_marks_fetched() {
        let mut state = WishlistState::new();
        assert!(!state.is_fetched());
        state.replace(Vec::new());
        assert!(state.is_fetched());
        assert!(state.entries().is_empty());
    }
}
