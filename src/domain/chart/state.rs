//! Chart engine state container — app-owned, SDK-provided update logic.

use crate::domain::chart::{
    display_label, ChartConfiguration, DerivedDataset, FetchPhase, FetchTicket, PieDataset,
    SeriesDataset, SymbolChange,
};
use crate::domain::historical::PricePoint;
use crate::domain::prediction::PredictionPoint;
use crate::error::SdkError;
use crate::shared::{ChartType, PredictionHorizon, Symbol, TimeRange};

/// State behind one mounted chart view.
///
/// The app owns an instance per viewed symbol and mutates it through the
/// methods here; nothing inside performs I/O. Configuration setters report
/// which fetches they require as [`FetchTicket`]s, the caller performs the
/// fetch however it likes, and `commit_*` / `fail_*` redeem the ticket.
/// A ticket superseded by a newer fetch on the same lifecycle is rejected
/// at redemption, so a slow stale response can never overwrite the result
/// of a newer one.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    symbol: Symbol,
    config: ChartConfiguration,
    historical: Vec<PricePoint>,
    prediction: Vec<PredictionPoint>,
    historical_phase: FetchPhase,
    prediction_phase: FetchPhase,
    last_historical_error: Option<String>,
    last_prediction_error: Option<String>,
    next_seq: u64,
    live_historical: Option<u64>,
    live_prediction: Option<u64>,
}

impl ChartEngine {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            config: ChartConfiguration::default(),
            historical: Vec::new(),
            prediction: Vec::new(),
            historical_phase: FetchPhase::Idle,
            prediction_phase: FetchPhase::Idle,
            last_historical_error: None,
            last_prediction_error: None,
            next_seq: 0,
            live_historical: None,
            live_prediction: None,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn config(&self) -> ChartConfiguration {
        self.config
    }

    /// Held historical series, ascending by date.
    pub fn historical(&self) -> &[PricePoint] {
        &self.historical
    }

    /// Held prediction series, in forecast order.
    pub fn prediction(&self) -> &[PredictionPoint] {
        &self.prediction
    }

    pub fn historical_phase(&self) -> FetchPhase {
        self.historical_phase
    }

    pub fn prediction_phase(&self) -> FetchPhase {
        self.prediction_phase
    }

    /// Message of the most recent failed historical fetch, cleared when the
    /// next one begins.
    pub fn historical_error(&self) -> Option<&str> {
        self.last_historical_error.as_deref()
    }

    /// Message of the most recent failed prediction fetch, cleared when the
    /// next one begins.
    pub fn prediction_error(&self) -> Option<&str> {
        self.last_prediction_error.as_deref()
    }

    /// Switch the viewed symbol. Returns the fetches the caller must drive,
    /// or `None` if the symbol is unchanged.
    ///
    /// The held prediction series belongs to the old symbol, so it is
    /// cleared immediately rather than rendered against the new symbol's
    /// history while its replacement is in flight. The historical series is
    /// kept until the replacement commits; the `Loading` phase covers the
    /// gap.
    pub fn set_symbol(&mut self, symbol: Symbol) -> Option<SymbolChange> {
        if symbol == self.symbol {
            return None;
        }
        self.symbol = symbol;
        let historical = self.begin_historical_fetch();
        let prediction = if self.config.prediction_visible {
            self.prediction.clear();
            Some(self.begin_prediction_fetch())
        } else {
            None
        };
        Some(SymbolChange {
            historical,
            prediction,
        })
    }

    /// Change the historical window. Returns the required fetch, or `None`
    /// if the range is unchanged.
    pub fn set_time_range(&mut self, range: TimeRange) -> Option<FetchTicket> {
        if range == self.config.time_range {
            return None;
        }
        self.config.time_range = range;
        Some(self.begin_historical_fetch())
    }

    /// Change the chart representation. Never issues a fetch; the next
    /// [`derived_dataset`](Self::derived_dataset) call reflects it.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.config.chart_type = chart_type;
    }

    /// Show or hide the prediction overlay. Returns the required fetch, or
    /// `None` if nothing needs fetching.
    ///
    /// Hiding clears the held prediction series outright, so showing again
    /// always fetches fresh data.
    pub fn set_prediction_visible(&mut self, visible: bool) -> Option<FetchTicket> {
        if visible == self.config.prediction_visible {
            return None;
        }
        self.config.prediction_visible = visible;
        if visible {
            Some(self.begin_prediction_fetch())
        } else {
            self.prediction.clear();
            self.prediction_phase = FetchPhase::Idle;
            self.last_prediction_error = None;
            self.live_prediction = None;
            None
        }
    }

    /// Change the forecast horizon. Refetches only while predictions are
    /// visible; hidden, the new horizon is stored for the next toggle-on.
    pub fn set_prediction_horizon(&mut self, horizon: PredictionHorizon) -> Option<FetchTicket> {
        if horizon == self.config.prediction_horizon {
            return None;
        }
        self.config.prediction_horizon = horizon;
        if self.config.prediction_visible {
            Some(self.begin_prediction_fetch())
        } else {
            None
        }
    }

    /// Start a historical fetch lifecycle, superseding any in flight.
    pub fn begin_historical_fetch(&mut self) -> FetchTicket {
        self.next_seq += 1;
        self.live_historical = Some(self.next_seq);
        self.historical_phase = FetchPhase::Loading;
        self.last_historical_error = None;
        FetchTicket::new(self.next_seq)
    }

    /// Start a prediction fetch lifecycle, superseding any in flight.
    pub fn begin_prediction_fetch(&mut self) -> FetchTicket {
        self.next_seq += 1;
        self.live_prediction = Some(self.next_seq);
        self.prediction_phase = FetchPhase::Loading;
        self.last_prediction_error = None;
        FetchTicket::new(self.next_seq)
    }

    /// Replace the historical series with a fetched one, expected ascending
    /// by date. Returns `false` if the ticket was superseded and the
    /// response discarded.
    pub fn commit_historical(&mut self, ticket: FetchTicket, series: Vec<PricePoint>) -> bool {
        if self.live_historical != Some(ticket.seq()) {
            tracing::debug!(
                "Discarding stale historical response for {} (ticket {})",
                self.symbol,
                ticket.seq()
            );
            return false;
        }
        self.historical = series;
        self.historical_phase = FetchPhase::Idle;
        self.live_historical = None;
        true
    }

    /// Record a failed historical fetch. The previous series stays in
    /// place. Returns `false` if the ticket was superseded.
    pub fn fail_historical(&mut self, ticket: FetchTicket, error: &SdkError) -> bool {
        if self.live_historical != Some(ticket.seq()) {
            tracing::debug!(
                "Discarding stale historical failure for {} (ticket {})",
                self.symbol,
                ticket.seq()
            );
            return false;
        }
        tracing::warn!("Historical fetch failed for {}: {}", self.symbol, error);
        self.last_historical_error = Some(error.to_string());
        self.historical_phase = FetchPhase::Idle;
        self.live_historical = None;
        true
    }

    /// Replace the prediction series with a fetched forecast. Returns
    /// `false` if the ticket was superseded (including by hiding the
    /// overlay).
    pub fn commit_prediction(&mut self, ticket: FetchTicket, series: Vec<PredictionPoint>) -> bool {
        if self.live_prediction != Some(ticket.seq()) {
            tracing::debug!(
                "Discarding stale prediction response for {} (ticket {})",
                self.symbol,
                ticket.seq()
            );
            return false;
        }
        self.prediction = series;
        self.prediction_phase = FetchPhase::Idle;
        self.live_prediction = None;
        true
    }

    /// Record a failed prediction fetch. Returns `false` if the ticket was
    /// superseded.
    pub fn fail_prediction(&mut self, ticket: FetchTicket, error: &SdkError) -> bool {
        if self.live_prediction != Some(ticket.seq()) {
            tracing::debug!(
                "Discarding stale prediction failure for {} (ticket {})",
                self.symbol,
                ticket.seq()
            );
            return false;
        }
        tracing::warn!("Prediction fetch failed for {}: {}", self.symbol, error);
        self.last_prediction_error = Some(error.to_string());
        self.prediction_phase = FetchPhase::Idle;
        self.live_prediction = None;
        true
    }

    /// Project the held series into the shape the selected chart type
    /// renders from. Pure with respect to the engine's state.
    ///
    /// Returns `None` while the historical series is empty; the caller
    /// renders its own "no data" affordance (distinct from the `Loading`
    /// phase, which the caller also gates on).
    pub fn derived_dataset(&self) -> Option<DerivedDataset> {
        let last = self.historical.last()?;
        let dataset = match self.config.chart_type {
            ChartType::Pie => {
                let mut max = last.close;
                let mut min = last.close;
                for point in &self.historical {
                    max = max.max(point.close);
                    min = min.min(point.close);
                }
                DerivedDataset::Pie(PieDataset {
                    current: last.close,
                    max,
                    min,
                })
            }
            chart_type => DerivedDataset::Series(self.series_dataset(chart_type)),
        };
        Some(dataset)
    }

    fn series_dataset(&self, chart_type: ChartType) -> SeriesDataset {
        let mut labels: Vec<String> = self
            .historical
            .iter()
            .map(|p| display_label(p.date))
            .collect();
        let historical: Vec<_> = self.historical.iter().map(|p| p.close).collect();

        let prediction = if self.config.prediction_visible {
            let mut series: Vec<_> = vec![None; historical.len()];
            for point in &self.prediction {
                labels.push(display_label(point.date));
                series.push(Some(point.price));
            }
            Some(series)
        } else {
            None
        };

        SeriesDataset {
            chart_type,
            labels,
            historical,
            prediction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use rust_decimal::Decimal;

    fn engine() -> ChartEngine {
        ChartEngine::new(Symbol::from("AAPL"))
    }

    fn series(start: &str, closes: &[i64]) -> Vec<PricePoint> {
        let start: NaiveDate = start.parse().unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                open: Decimal::from(*close),
                high: Decimal::from(*close + 1),
                low: Decimal::from(*close - 1),
                close: Decimal::from(*close),
                volume: 1_000,
            })
            .collect()
    }

    fn forecast(start: &str, prices: &[i64]) -> Vec<PredictionPoint> {
        let start: NaiveDate = start.parse().unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| PredictionPoint {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                price: Decimal::from(*price),
            })
            .collect()
    }

    #[test]
    fn test_initial_state_is_idle_and_empty() {
        let engine = engine();
        assert_eq!(engine.historical_phase(), FetchPhase::Idle);
        assert_eq!(engine.prediction_phase(), FetchPhase::Idle);
        assert!(engine.historical().is_empty());
        assert_eq!(engine.config(), ChartConfiguration::default());
        assert!(engine.derived_dataset().is_none());
    }

    #[test]
    fn test_time_range_change_triggers_historical_fetch() {
        let mut engine = engine();
        let ticket = engine.set_time_range(TimeRange::Week1).unwrap();
        assert_eq!(engine.historical_phase(), FetchPhase::Loading);

        assert!(engine.commit_historical(ticket, series("2025-08-05", &[10, 11, 12])));
        assert_eq!(engine.historical_phase(), FetchPhase::Idle);
        assert_eq!(engine.historical().len(), 3);

        match engine.derived_dataset().unwrap() {
            DerivedDataset::Series(data) => {
                assert_eq!(data.chart_type, ChartType::Line);
                assert_eq!(data.labels, vec!["Aug 5", "Aug 6", "Aug 7"]);
                assert_eq!(data.historical.len(), 3);
                assert!(data.prediction.is_none());
            }
            other => panic!("expected series dataset, got: {other:?}"),
        }
    }

    #[test]
    fn test_unchanged_config_is_a_no_op() {
        let mut engine = engine();
        assert!(engine.set_time_range(TimeRange::Month1).is_none());
        assert!(engine.set_prediction_horizon(PredictionHorizon::Month1).is_none());
        assert!(engine.set_prediction_visible(false).is_none());
        assert_eq!(engine.historical_phase(), FetchPhase::Idle);
        assert_eq!(engine.prediction_phase(), FetchPhase::Idle);
    }

    #[test]
    fn test_chart_type_change_issues_no_fetch() {
        let mut engine = engine();
        let ticket = engine.begin_historical_fetch();
        engine.commit_historical(ticket, series("2025-08-05", &[10, 11, 12]));

        engine.set_chart_type(ChartType::Bar);
        assert_eq!(engine.historical_phase(), FetchPhase::Idle);
        assert_eq!(engine.prediction_phase(), FetchPhase::Idle);
        match engine.derived_dataset().unwrap() {
            DerivedDataset::Series(data) => assert_eq!(data.chart_type, ChartType::Bar),
            other => panic!("expected series dataset, got: {other:?}"),
        }

        engine.set_chart_type(ChartType::Pie);
        assert!(matches!(
            engine.derived_dataset(),
            Some(DerivedDataset::Pie(_))
        ));
    }

    #[test]
    fn test_stale_historical_response_is_discarded() {
        let mut engine = engine();
        let slow = engine.set_time_range(TimeRange::Month3).unwrap();
        let fast = engine.set_time_range(TimeRange::Week1).unwrap();

        assert!(engine.commit_historical(fast, series("2025-08-05", &[20, 21])));
        assert!(!engine.commit_historical(slow, series("2025-06-01", &[90, 91, 92])));

        assert_eq!(engine.historical().len(), 2);
        assert_eq!(engine.historical()[0].close, Decimal::from(20));
        assert_eq!(engine.historical_phase(), FetchPhase::Idle);
    }

    #[test]
    fn test_failure_keeps_previous_series() {
        let mut engine = engine();
        let ticket = engine.begin_historical_fetch();
        engine.commit_historical(ticket, series("2025-08-05", &[10, 11, 12]));

        let ticket = engine.set_time_range(TimeRange::Year1).unwrap();
        assert!(engine.fail_historical(ticket, &SdkError::Other("connection reset".into())));

        assert_eq!(engine.historical().len(), 3);
        assert_eq!(engine.historical_phase(), FetchPhase::Idle);
        assert!(engine.historical_error().unwrap().contains("connection reset"));
    }

    #[test]
    fn test_stale_failure_does_not_flag_error() {
        let mut engine = engine();
        let slow = engine.set_time_range(TimeRange::Month3).unwrap();
        let fast = engine.set_time_range(TimeRange::Week1).unwrap();

        assert!(engine.commit_historical(fast, series("2025-08-05", &[20, 21])));
        assert!(!engine.fail_historical(slow, &SdkError::Other("timed out".into())));
        assert!(engine.historical_error().is_none());
    }

    #[test]
    fn test_prediction_toggle_clears_and_refetches() {
        let mut engine = engine();
        let first = engine.set_prediction_visible(true).unwrap();
        assert_eq!(engine.prediction_phase(), FetchPhase::Loading);
        assert!(engine.commit_prediction(first, forecast("2025-09-01", &[30, 31])));
        assert_eq!(engine.prediction().len(), 2);

        assert!(engine.set_prediction_visible(false).is_none());
        assert!(engine.prediction().is_empty());
        assert_eq!(engine.prediction_phase(), FetchPhase::Idle);

        let second = engine.set_prediction_visible(true).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_horizon_change_refetches_only_when_visible() {
        let mut engine = engine();
        assert!(engine.set_prediction_horizon(PredictionHorizon::Month3).is_none());
        assert_eq!(
            engine.config().prediction_horizon,
            PredictionHorizon::Month3
        );
        assert_eq!(engine.prediction_phase(), FetchPhase::Idle);

        engine.set_prediction_visible(true).unwrap();
        assert!(engine.set_prediction_horizon(PredictionHorizon::Month6).is_some());
    }

    #[test]
    fn test_prediction_commit_after_hide_is_discarded() {
        let mut engine = engine();
        let ticket = engine.set_prediction_visible(true).unwrap();
        engine.set_prediction_visible(false);

        assert!(!engine.commit_prediction(ticket, forecast("2025-09-01", &[30])));
        assert!(engine.prediction().is_empty());
    }

    #[test]
    fn test_line_dataset_aligns_prediction_axis() {
        let mut engine = engine();
        let ticket = engine.begin_historical_fetch();
        engine.commit_historical(ticket, series("2025-08-05", &[10, 11, 12]));
        let ticket = engine.set_prediction_visible(true).unwrap();
        engine.commit_prediction(ticket, forecast("2025-08-08", &[13, 14]));

        match engine.derived_dataset().unwrap() {
            DerivedDataset::Series(data) => {
                assert_eq!(
                    data.labels,
                    vec!["Aug 5", "Aug 6", "Aug 7", "Aug 8", "Aug 9"]
                );
                assert_eq!(data.historical.len(), 3);
                assert_eq!(
                    data.prediction.unwrap(),
                    vec![
                        None,
                        None,
                        None,
                        Some(Decimal::from(13)),
                        Some(Decimal::from(14)),
                    ]
                );
            }
            other => panic!("expected series dataset, got: {other:?}"),
        }
    }

    #[test]
    fn test_prediction_axis_before_forecast_lands() {
        let mut engine = engine();
        let ticket = engine.begin_historical_fetch();
        engine.commit_historical(ticket, series("2025-08-05", &[10, 11, 12]));
        engine.set_prediction_visible(true);

        match engine.derived_dataset().unwrap() {
            DerivedDataset::Series(data) => {
                assert_eq!(data.labels.len(), 3);
                assert_eq!(data.prediction.unwrap(), vec![None, None, None]);
            }
            other => panic!("expected series dataset, got: {other:?}"),
        }
    }

    #[test]
    fn test_pie_dataset_summarizes_closes() {
        let mut engine = engine();
        let closes: Vec<i64> = (0..30).map(|i| 100 + (i * 7) % 23).collect();
        let ticket = engine.begin_historical_fetch();
        engine.commit_historical(ticket, series("2025-07-01", &closes));
        engine.set_chart_type(ChartType::Pie);

        let expected_current = Decimal::from(closes[29]);
        let expected_max = Decimal::from(*closes.iter().max().unwrap());
        let expected_min = Decimal::from(*closes.iter().min().unwrap());

        match engine.derived_dataset().unwrap() {
            DerivedDataset::Pie(pie) => {
                assert_eq!(pie.current, expected_current);
                assert_eq!(pie.max, expected_max);
                assert_eq!(pie.min, expected_min);
            }
            other => panic!("expected pie dataset, got: {other:?}"),
        }

        // Visible predictions leave the pie untouched.
        let ticket = engine.set_prediction_visible(true).unwrap();
        engine.commit_prediction(ticket, forecast("2025-07-31", &[999]));
        match engine.derived_dataset().unwrap() {
            DerivedDataset::Pie(pie) => assert_eq!(pie.max, expected_max),
            other => panic!("expected pie dataset, got: {other:?}"),
        }
    }

    #[test]
    fn test_empty_series_derives_none_for_all_chart_types() {
        let mut engine = engine();
        for chart_type in [ChartType::Line, ChartType::Bar, ChartType::Pie] {
            engine.set_chart_type(chart_type);
            assert!(engine.derived_dataset().is_none());
        }
    }

    #[test]
    fn test_derived_dataset_is_idempotent() {
        let mut engine = engine();
        let ticket = engine.begin_historical_fetch();
        engine.commit_historical(ticket, series("2025-08-05", &[10, 11, 12]));
        let ticket = engine.set_prediction_visible(true).unwrap();
        engine.commit_prediction(ticket, forecast("2025-08-08", &[13]));

        assert_eq!(engine.derived_dataset(), engine.derived_dataset());
    }

    #[test]
    fn test_symbol_change_refetches_and_clears_prediction() {
        let mut engine = engine();
        let ticket = engine.begin_historical_fetch();
        engine.commit_historical(ticket, series("2025-08-05", &[10, 11]));
        let ticket = engine.set_prediction_visible(true).unwrap();
        engine.commit_prediction(ticket, forecast("2025-08-07", &[12]));

        let change = engine.set_symbol(Symbol::from("MSFT")).unwrap();
        assert!(change.prediction.is_some());
        assert_eq!(engine.symbol().as_str(), "MSFT");
        assert!(engine.prediction().is_empty());
        assert_eq!(engine.historical_phase(), FetchPhase::Loading);
        assert_eq!(engine.historical().len(), 2);

        assert!(engine.set_symbol(Symbol::from("MSFT")).is_none());
    }

    #[test]
    fn test_symbol_change_while_hidden_skips_prediction_fetch() {
        let mut engine = engine();
        let change = engine.set_symbol(Symbol::from("NVDA")).unwrap();
        assert!(change.prediction.is_none());
        assert_eq!(engine.prediction_phase(), FetchPhase::Idle);
    }
}
