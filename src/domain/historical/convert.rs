//! Conversion: DailySeriesResponse → Vec<PricePoint> (validation + ordering).

use super::wire;
use super::{PricePoint, ValidationError};
use chrono::NaiveDate;

impl TryFrom<(&str, wire::DailyBarResponse)> for PricePoint {
    type Error = ValidationError;

    fn try_from((date, bar): (&str, wire::DailyBarResponse)) -> Result<Self, Self::Error> {
        let date = date
            .parse::<NaiveDate>()
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        Ok(PricePoint {
            date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        })
    }
}

/// Validate a raw daily-series mapping into an ascending `PricePoint` series.
///
/// The backend serializes the mapping newest-first, but JSON object order is
/// not a contract; ordering is re-established here. An empty mapping is a
/// legitimate empty series, not an error.
pub fn daily_series(resp: wire::DailySeriesResponse) -> Result<Vec<PricePoint>, ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let mut points: Vec<PricePoint> = Vec::with_capacity(resp.len());

    for (date, bar) in resp {
        match PricePoint::try_from((date.as_str(), bar)) {
            Ok(point) => points.push(point),
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(ValidationError::Multiple(errors));
    }

    points.sort_by_key(|p| p.date);
    Ok(points)
}
