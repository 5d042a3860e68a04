//! HTTP client layer — `StockPredictHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::StockPredictHttp;
pub use retry::{RetryConfig, RetryPolicy};
