//! Wire types for the historical endpoints (REST).
//!
//! The backend relays Alpha Vantage's daily-series shape untouched: a JSON
//! object mapping `"YYYY-MM-DD"` keys to bars whose numeric fields are all
//! string-encoded, under their original ordinal-prefixed names.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response shape of `/stocks/{symbol}/historical/{range}` and
/// `/stocks/{symbol}/twodays`: date string → daily bar.
pub type DailySeriesResponse = HashMap<String, DailyBarResponse>;

/// One raw daily bar.
///
/// A missing field or an unparseable number fails deserialization of the
/// whole response; the fetch is then treated as a malformed payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyBarResponse {
    #[serde(rename = "1. open", with = "rust_decimal::serde::str")]
    pub open: Decimal,
    #[serde(rename = "2. high", with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(rename = "3. low", with = "rust_decimal::serde::str")]
    pub low: Decimal,
    #[serde(rename = "4. close", with = "rust_decimal::serde::str")]
    pub close: Decimal,
    #[serde(rename = "5. volume", with = "serde_util::u64_str")]
    pub volume: u64,
}
