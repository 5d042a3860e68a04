//! Historical sub-client — daily series queries.

use crate::client::StockPredictClient;
use crate::domain::historical::{self, convert, PricePoint};
use crate::error::SdkError;
use crate::shared::{Symbol, TimeRange};

/// Sub-client for historical series operations.
pub struct HistoricalClient<'a> {
    pub(crate) client: &'a StockPredictClient,
}

impl<'a> HistoricalClient<'a> {
    /// Fetch the daily series for a symbol over a time range, ascending by date.
    ///
    /// The returned window is whatever the backend's range mapping produces;
    /// an unsupported symbol yields an empty series.
    pub async fn daily_series(
        &self,
        symbol: &Symbol,
        range: TimeRange,
    ) -> Result<Vec<PricePoint>, SdkError> {
        let resp = self.client.http.get_historical(symbol, range).await?;
        convert::daily_series(resp)
            .map_err(|e: historical::ValidationError| SdkError::Validation(e.to_string()))
    }
}
