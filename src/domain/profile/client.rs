//! Profiles sub-client — fetch and cache.

use crate::client::StockPredictClient;
use crate::domain::profile::{self, convert, CompanyProfile};
use crate::error::{HttpError, SdkError};
use crate::shared::Symbol;
use std::time::Instant;

/// Sub-client for company profiles.
pub struct Profiles<'a> {
    pub(crate) client: &'a StockPredictClient,
}

impl<'a> Profiles<'a> {
    /// Get the profile for a symbol. Uses TTL cache.
    ///
    /// `Ok(None)` means the provider has no profile for the symbol, which
    /// the backend reports as 404 or as an empty array.
    pub async fn get(&self, symbol: &Symbol) -> Result<Option<CompanyProfile>, SdkError> {
        {
            let cache = self.client.profile_cache.read().await;
            if let Some((profile, fetched_at)) = cache.get(symbol.as_str()) {
                if fetched_at.elapsed() < self.client.profile_cache_ttl {
                    return Ok(Some(profile.clone()));
                }
            }
        }

        let raw = match self.client.http.get_stock_profile(symbol).await {
            Ok(raw) => raw,
            Err(HttpError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let profile = convert::first_profile(raw)
            .map_err(|e: profile::ValidationError| SdkError::Validation(e.to_string()))?;
        if let Some(ref profile) = profile {
            self.cache_profile(symbol, profile).await;
        }
        Ok(profile)
    }

    /// Invalidate a cached profile by symbol.
    pub async fn invalidate(&self, symbol: &Symbol) {
        self.client.profile_cache.write().await.remove(symbol.as_str());
    }

    /// Clear the profile cache.
    pub async fn clear_cache(&self) {
        self.client.profile_cache.write().await.clear();
    }

    async fn cache_profile(&self, symbol: &Symbol, profile: &CompanyProfile) {
        self.client
            .profile_cache
            .write()
            .await
            .insert(symbol.as_str().to_string(), (profile.clone(), Instant::now()));
    }
}
