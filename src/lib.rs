//! # StockPredict SDK
//!
//! A unified Rust SDK for the StockPredict backend supporting both native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Types, domain models, chart state machine (always available,
//!    WASM-safe, no I/O)
//! 2. **HTTP API** — `StockPredictHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `StockPredictClient` with nested sub-clients
//!    and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockpredict_sdk::prelude::*;
//!
//! let client = StockPredictClient::builder()
//!     .base_url("http://127.0.0.1:5000")
//!     .build()?;
//!
//! let mut chart = client.chart("AAPL");
//! chart.mount().await;
//! chart.set_prediction_visible(true).await;
//! let dataset = chart.engine.derived_dataset();
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StockPredictClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes and enums
    pub use crate::shared::{ChartType, PredictionHorizon, Symbol, TimeRange, UserId};

    // Domain types — chart
    pub use crate::domain::chart::{
        ChartConfiguration, ChartEngine, DerivedDataset, FetchPhase, FetchTicket, PieDataset,
        SeriesDataset, SymbolChange,
    };

    // Domain types — series
    pub use crate::domain::historical::PricePoint;
    pub use crate::domain::prediction::PredictionPoint;

    // Domain types — overview, profile, wishlist
    pub use crate::domain::profile::CompanyProfile;
    pub use crate::domain::quotes::{MarketOverviewEntry, TOP_COMPANIES};
    pub use crate::domain::wishlist::WishlistEntry;

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{DEFAULT_API_URL, LOCAL_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        HistoricalSubClient, PredictionsClient, ProfilesClient, QuotesClient, StockPredictClient,
        StockPredictClientBuilder, WishlistClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::chart::ChartSession;
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // State containers
    pub use crate::domain::profile::ProfileState;
    pub use crate::domain::wishlist::WishlistState;
}
