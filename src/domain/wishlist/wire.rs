//! Wire types for the wishlist endpoints.
//!
//! `GET /wishlist/{user_id}` returns a bare array of entries (404 when the
//! user has never saved one); `POST /wishlist/{user_id}` takes the whole
//! list wrapped in an object and replaces what is stored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistEntryResponse {
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveWishlistRequest {
    pub wishlist: Vec<WishlistEntryResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_entry_array() {
        let json = r#"[
            {"symbol": "AAPL", "name": "Apple Inc."},
            {"symbol": "NVDA", "name": "NVIDIA Corporation"}
        ]"#;
        let entries: Vec<WishlistEntryResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symbol, "AAPL");
        assert_eq!(entries[1].name, "NVIDIA Corporation");
    }

    #[test]
    fn test_save_request_wraps_list() {
        let req = SaveWishlistRequest {
            wishlist: vec![WishlistEntryResponse {
                symbol: "MSFT".into(),
                name: "Microsoft Corporation".into(),
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["wishlist"][0]["symbol"], "MSFT");
    }
}
