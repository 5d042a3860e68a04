//! Chart domain — configuration, fetch lifecycles, and derived datasets.
//!
//! [`ChartEngine`] owns the state behind one mounted chart view: the user's
//! configuration, the historical and predicted series, and the two fetch
//! lifecycles that fill them. [`ChartSession`] wraps an engine together with
//! a client and drives the fetches over HTTP.

#[cfg(feature = "http")]
pub mod session;
pub mod state;

use crate::shared::{ChartType, PredictionHorizon, TimeRange};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[cfg(feature = "http")]
pub use session::ChartSession;
pub use state::ChartEngine;

/// User-driven display settings for one chart view.
///
/// `Default` matches the state at mount: one month of history, a line
/// chart, predictions hidden, one-month horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartConfiguration {
    pub time_range: TimeRange,
    pub chart_type: ChartType,
    pub prediction_visible: bool,
    pub prediction_horizon: PredictionHorizon,
}

/// Phase of one remote-fetch lifecycle.
///
/// Failure is not a resting state: a failed fetch records its error, logs,
/// and returns the lifecycle to `Idle` in the same transition, keeping
/// whatever series was held before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
}

/// Handle for one issued fetch, redeemed with the engine's `commit_*` or
/// `fail_*` methods.
///
/// Tickets come from a single monotonic counter per engine; a response
/// redeeming a superseded ticket is discarded rather than committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub(crate) fn new(seq: u64) -> Self {
        FetchTicket(seq)
    }

    pub(crate) fn seq(self) -> u64 {
        self.0
    }
}

/// Fetches to drive after [`ChartEngine::set_symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolChange {
    pub historical: FetchTicket,
    /// Present when predictions were visible at the moment of the switch.
    pub prediction: Option<FetchTicket>,
}

/// Render-ready projection of the held series for the selected chart type.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivedDataset {
    Series(SeriesDataset),
    Pie(PieDataset),
}

/// Time-indexed dataset for line and bar charts.
///
/// `labels` is the shared axis: historical dates first, prediction dates
/// appended while predictions are visible. `historical` spans the first
/// `historical.len()` labels and nothing past them. `prediction` (present
/// iff predictions are visible) spans every label, holding `None` in each
/// historical position so the rendering surface never interpolates across
/// the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDataset {
    pub chart_type: ChartType,
    pub labels: Vec<String>,
    pub historical: Vec<Decimal>,
    pub prediction: Option<Vec<Option<Decimal>>>,
}

/// Three-slice summary for pie charts. Predictions are ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieDataset {
    /// Close of the most recent session.
    pub current: Decimal,
    /// Highest close across the held series.
    pub max: Decimal,
    /// Lowest close across the held series.
    pub min: Decimal,
}

/// Slice labels, in [`PieDataset::slices`] order.
pub const SLICE_LABELS: [&str; 3] = ["Current Price", "Day High", "Day Low"];

impl PieDataset {
    /// Label/value pairs in render order.
    pub fn slices(&self) -> [(&'static str, Decimal); 3] {
        [
            (SLICE_LABELS[0], self.current),
            (SLICE_LABELS[1], self.max),
            (SLICE_LABELS[2], self.min),
        ]
    }
}

/// Axis label for a date, e.g. "Aug 26".
pub fn display_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_drops_day_padding() {
        let date: NaiveDate = "2025-08-05".parse().unwrap();
        assert_eq!(display_label(date), "Aug 5");
        let date: NaiveDate = "2025-12-26".parse().unwrap();
        assert_eq!(display_label(date), "Dec 26");
    }

    #[test]
    fn test_default_configuration_matches_mount_state() {
        let config = ChartConfiguration::default();
        assert_eq!(config.time_range, TimeRange::Month1);
        assert_eq!(config.chart_type, ChartType::Line);
        assert!(!config.prediction_visible);
        assert_eq!(config.prediction_horizon, PredictionHorizon::Month1);
    }
}
