//! Forecast client (`POST /predict`).

use crate::client::StockPredictClient;
use crate::domain::prediction::{self, convert, PredictionPoint, TRAINING_WINDOW_START};
use crate::error::SdkError;
use crate::shared::{PredictionHorizon, Symbol};

/// Client for the model-backed forecast endpoint.
pub struct Predictions<'a> {
    pub(crate) client: &'a StockPredictClient,
}

impl<'a> Predictions<'a> {
    /// Request a forecast for `symbol` covering `horizon`.
    ///
    /// The model trains on the fixed window from [`TRAINING_WINDOW_START`]
    /// through today (UTC) and emits one predicted close per horizon day.
    pub async fn forecast(
        &self,
        symbol: &Symbol,
        horizon: PredictionHorizon,
    ) -> Result<Vec<PredictionPoint>, SdkError> {
        let request = prediction::wire::PredictRequest {
            ticker: symbol.as_str().to_string(),
            start_date: TRAINING_WINDOW_START.to_string(),
            end_date: chrono::Utc::now()
                .date_naive()
                .format("%Y-%m-%d")
                .to_string(),
            days: horizon.days(),
        };
        let resp = self.client.http.predict(&request).await?;
        convert::forecast_series(resp)
            .map_err(|e: prediction::ValidationError| SdkError::Validation(e.to_string()))
    }
}
