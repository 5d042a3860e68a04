//! Wire types for the predict endpoint (REST).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`.
///
/// `days` is the forecast length; the date strings bound the series the model
/// is re-run against (`start_date` is fixed, `end_date` is "today").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub days: u32,
}

/// Response body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub predictions: Vec<PredictedPointResponse>,
}

/// One raw forecast point. The model emits prices as JSON floats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictedPointResponse {
    pub date: NaiveDate,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_response_parses() {
        let json = r#"{
            "predictions": [
                { "date": "2025-08-27", "price": 233.81 },
                { "date": "2025-08-28", "price": 234.02 }
            ]
        }"#;
        let resp: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.predictions.len(), 2);
        assert_eq!(resp.predictions[0].date.to_string(), "2025-08-27");
    }

    #[test]
    fn test_predict_request_serializes_flat() {
        let req = PredictRequest {
            ticker: "AAPL".into(),
            start_date: "2010-01-01".into(),
            end_date: "2025-08-26".into(),
            days: 30,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["days"], 30);
        assert_eq!(json["start_date"], "2010-01-01");
    }

    #[test]
    fn test_prediction_response_rejects_bad_date() {
        let json = r#"{ "predictions": [ { "date": "soon", "price": 1.0 } ] }"#;
        assert!(serde_json::from_str::<PredictionResponse>(json).is_err());
    }
}
