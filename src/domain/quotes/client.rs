//! Quotes sub-client — latest session per symbol, market overview.

use crate::client::StockPredictClient;
use crate::domain::historical::{self, convert, PricePoint};
use crate::domain::quotes::{MarketOverviewEntry, TOP_COMPANIES};
use crate::error::SdkError;
use crate::shared::Symbol;
use std::time::Instant;

/// Sub-client for latest-session quotes.
pub struct Quotes<'a> {
    pub(crate) client: &'a StockPredictClient,
}

impl<'a> Quotes<'a> {
    /// Get the most recent completed session for a symbol. Uses TTL cache.
    pub async fn latest(&self, symbol: &Symbol) -> Result<PricePoint, SdkError> {
        {
            let cache = self.client.quote_cache.read().await;
            if let Some((point, fetched_at)) = cache.get(symbol.as_str()) {
                if fetched_at.elapsed() < self.client.quote_cache_ttl {
                    return Ok(point.clone());
                }
            }
        }

        let resp = self.client.http.get_two_days(symbol).await?;
        let mut series = convert::daily_series(resp)
            .map_err(|e: historical::ValidationError| SdkError::Validation(e.to_string()))?;
        // Ascending order, so the latest session is the last entry.
        let point = series
            .pop()
            .ok_or_else(|| SdkError::Validation(format!("empty two-day series for {symbol}")))?;

        self.client
            .quote_cache
            .write()
            .await
            .insert(symbol.as_str().to_string(), (point.clone(), Instant::now()));
        Ok(point)
    }

    /// Assemble the market overview for [`TOP_COMPANIES`].
    ///
    /// A company whose quote cannot be fetched is logged and left out, so
    /// one bad symbol never blanks the whole table.
    pub async fn market_overview(&self) -> Vec<MarketOverviewEntry> {
        let mut entries = Vec::with_capacity(TOP_COMPANIES.len());
        for (symbol, name) in TOP_COMPANIES {
            let symbol = Symbol::from(symbol);
            match self.latest(&symbol).await {
                Ok(latest) => entries.push(MarketOverviewEntry {
                    symbol,
                    name: name.to_string(),
                    latest,
                }),
                Err(e) => {
                    tracing::warn!("Skipping {} in market overview: {}", symbol, e);
                }
            }
        }
        entries
    }

    /// Clear the quote cache.
    pub async fn clear_cache(&self) {
        self.client.quote_cache.write().await.clear();
    }
}
