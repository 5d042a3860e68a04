//! Low-level HTTP client — `StockPredictHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! sub-clients wrap this.

use crate::domain::historical::wire::DailySeriesResponse;
use crate::domain::prediction::wire::{PredictRequest, PredictionResponse};
use crate::domain::profile::wire::CompanyProfileResponse;
use crate::domain::wishlist::wire::{SaveWishlistRequest, WishlistEntryResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{Symbol, TimeRange, UserId};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing;

/// Low-level HTTP client for the StockPredict REST API.
#[derive(Clone)]
pub struct StockPredictHttp {
    base_url: String,
    client: Client,
}

impl StockPredictHttp {
    pub fn new(base_url: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Stocks ───────────────────────────────────────────────────────────

    /// Daily OHLCV mapping for a symbol, windowed server-side by `range`.
    pub async fn get_historical(
        &self,
        symbol: &Symbol,
        range: TimeRange,
    ) -> Result<DailySeriesResponse, HttpError> {
        let url = format!(
            "{}/stocks/{}/historical/{}",
            self.base_url,
            encode_symbol(symbol),
            range.as_str()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    /// The two most recent sessions for a symbol, same mapping shape as
    /// [`get_historical`](Self::get_historical).
    pub async fn get_two_days(&self, symbol: &Symbol) -> Result<DailySeriesResponse, HttpError> {
        let url = format!(
            "{}/stocks/{}/twodays",
            self.base_url,
            encode_symbol(symbol)
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Prediction ───────────────────────────────────────────────────────

    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictionResponse, HttpError> {
        let url = format!("{}/predict", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Wishlist ─────────────────────────────────────────────────────────

    /// 404 here means "no wishlist saved yet"; callers map it to empty.
    pub async fn get_wishlist(
        &self,
        user: &UserId,
    ) -> Result<Vec<WishlistEntryResponse>, HttpError> {
        let url = format!(
            "{}/wishlist/{}",
            self.base_url,
            urlencoding::encode(user.as_str())
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    /// Replaces the stored list wholesale, so retrying is safe.
    pub async fn save_wishlist(
        &self,
        user: &UserId,
        request: &SaveWishlistRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/wishlist/{}",
            self.base_url,
            urlencoding::encode(user.as_str())
        );
        self.post(&url, request, RetryPolicy::Idempotent).await
    }

    // ── Profile ──────────────────────────────────────────────────────────

    pub async fn get_stock_profile(
        &self,
        symbol: &Symbol,
    ) -> Result<Vec<CompanyProfileResponse>, HttpError> {
        let url = format!(
            "{}/get-stock-profile/{}",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, retry: RetryPolicy) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                let delay = Duration::from_millis(*ms);
                                futures_timer::Delay::new(delay).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        #[cfg(feature = "http")]
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// Stock paths take the symbol lower-cased; the backend upper-cases before
/// hitting the data provider. Encoded because symbols are user-typed.
fn encode_symbol(symbol: &Symbol) -> String {
    urlencoding::encode(&symbol.as_str().to_lowercase()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_symbol_lowercases() {
        assert_eq!(encode_symbol(&Symbol::from("AAPL")), "aapl");
    }

    #[test]
    fn test_encode_symbol_keeps_exchange_suffix() {
        assert_eq!(encode_symbol(&Symbol::from("RELIANCE.NS")), "reliance.ns");
    }
}
