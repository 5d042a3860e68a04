//! Network URL constants for the StockPredict SDK.

/// Default REST API base URL (deployed backend).
pub const DEFAULT_API_URL: &str = "https://api.stockpredict.app";

/// Base URL of a locally running Flask backend.
pub const LOCAL_API_URL: &str = "http://127.0.0.1:5000";
