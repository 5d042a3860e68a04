//! High-level client — `StockPredictClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::chart::ChartSession;
use crate::domain::historical::client::HistoricalClient;
use crate::domain::historical::PricePoint;
use crate::domain::prediction::client::Predictions;
use crate::domain::profile::client::Profiles;
use crate::domain::profile::CompanyProfile;
use crate::domain::quotes::client::Quotes;
use crate::domain::wishlist::client::Wishlist;
use crate::error::SdkError;
use crate::http::StockPredictHttp;
use crate::shared::Symbol;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::historical::client::HistoricalClient as HistoricalSubClient;
pub use crate::domain::prediction::client::Predictions as PredictionsClient;
pub use crate::domain::profile::client::Profiles as ProfilesClient;
pub use crate::domain::quotes::client::Quotes as QuotesClient;
pub use crate::domain::wishlist::client::Wishlist as WishlistClient;

/// The primary entry point for the StockPredict SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.historical()`, `client.predictions()`, etc.
pub struct StockPredictClient {
    pub(crate) http: StockPredictHttp,
    /// Profile cache: symbol → (CompanyProfile, fetched_at)
    pub(crate) profile_cache: Arc<RwLock<HashMap<String, (CompanyProfile, Instant)>>>,
    /// Quote cache: symbol → (latest session, fetched_at)
    pub(crate) quote_cache: Arc<RwLock<HashMap<String, (PricePoint, Instant)>>>,
    /// Cache TTL for profiles (descriptive data, changes rarely)
    pub(crate) profile_cache_ttl: Duration,
    /// Cache TTL for quotes
    pub(crate) quote_cache_ttl: Duration,
}

impl StockPredictClient {
    pub fn builder() -> StockPredictClientBuilder {
        StockPredictClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn historical(&self) -> HistoricalClient<'_> {
        HistoricalClient { client: self }
    }

    pub fn predictions(&self) -> Predictions<'_> {
        Predictions { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn profiles(&self) -> Profiles<'_> {
        Profiles { client: self }
    }

    pub fn wishlist(&self) -> Wishlist<'_> {
        Wishlist { client: self }
    }

    /// Start a chart session for a symbol.
    ///
    /// The session is not embedded in `StockPredictClient` because its
    /// lifetime is typically tied to a mounted chart view; the app owns it
    /// and drops it on navigation.
    pub fn chart(&self, symbol: impl Into<Symbol>) -> ChartSession<'_> {
        ChartSession::new(self, symbol.into())
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.profile_cache.write().await.clear();
        self.quote_cache.write().await.clear();
    }
}

impl Clone for StockPredictClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            profile_cache: self.profile_cache.clone(),
            quote_cache: self.quote_cache.clone(),
            profile_cache_ttl: self.profile_cache_ttl,
            quote_cache_ttl: self.quote_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StockPredictClientBuilder {
    base_url: String,
    profile_cache_ttl: Duration,
    quote_cache_ttl: Duration,
}

impl Default for StockPredictClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            profile_cache_ttl: Duration::from_secs(3600),
            quote_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl StockPredictClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn profile_cache_ttl(mut self, ttl: Duration) -> Self {
        self.profile_cache_ttl = ttl;
        self
    }

    pub fn quote_cache_ttl(mut self, ttl: Duration) -> Self {
        self.quote_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<StockPredictClient, SdkError> {
        Ok(StockPredictClient {
            http: StockPredictHttp::new(&self.base_url),
            profile_cache: Arc::new(RwLock::new(HashMap::new())),
            quote_cache: Arc::new(RwLock::new(HashMap::new())),
            profile_cache_ttl: self.profile_cache_ttl,
            quote_cache_ttl: self.quote_cache_ttl,
        })
    }
}
