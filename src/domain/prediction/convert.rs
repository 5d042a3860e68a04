//! Conversion: PredictionResponse → Vec<PredictionPoint> (fail-closed floats).

use super::wire;
use super::{PredictionPoint, ValidationError};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

impl TryFrom<wire::PredictedPointResponse> for PredictionPoint {
    type Error = ValidationError;

    fn try_from(source: wire::PredictedPointResponse) -> Result<Self, Self::Error> {
        let price = Decimal::from_f64(source.price).ok_or(ValidationError::InvalidPrice {
            date: source.date,
            value: source.price,
        })?;
        Ok(PredictionPoint {
            date: source.date,
            price,
        })
    }
}

/// Validate a raw forecast response, preserving the model's emission order
/// (consecutive days after the request's `end_date`).
pub fn forecast_series(
    resp: wire::PredictionResponse,
) -> Result<Vec<PredictionPoint>, ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let mut points: Vec<PredictionPoint> = Vec::with_capacity(resp.predictions.len());

    for raw in resp.predictions {
        match raw.try_into() {
            Ok(point) => points.push(point),
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(ValidationError::Multiple(errors));
    }

    Ok(points)
}
