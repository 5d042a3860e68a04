//! HTTP-driven chart session — wires a [`ChartEngine`] to the API clients.

use crate::client::StockPredictClient;
use crate::domain::chart::{ChartEngine, FetchTicket};
use crate::shared::{ChartType, PredictionHorizon, Symbol, TimeRange};

/// A [`ChartEngine`] paired with the client that feeds it.
///
/// Fetch errors never escape: each one is logged and recorded on the
/// engine's error flags, and the previously held series stays available.
/// The hosting view reads `engine` for phases, errors, and datasets.
///
/// The two lifecycles are driven one after the other here; an app that
/// wants them in flight concurrently can call the engine's `begin_*` and
/// `commit_*` / `fail_*` primitives itself.
pub struct ChartSession<'a> {
    client: &'a StockPredictClient,
    pub engine: ChartEngine,
}

impl<'a> ChartSession<'a> {
    pub fn new(client: &'a StockPredictClient, symbol: Symbol) -> Self {
        Self {
            client,
            engine: ChartEngine::new(symbol),
        }
    }

    /// Load the series for a freshly mounted view: historical always, the
    /// forecast too when the configuration has predictions visible.
    pub async fn mount(&mut self) {
        let ticket = self.engine.begin_historical_fetch();
        self.run_historical(ticket).await;
        if self.engine.config().prediction_visible {
            let ticket = self.engine.begin_prediction_fetch();
            self.run_prediction(ticket).await;
        }
    }

    pub async fn set_symbol(&mut self, symbol: Symbol) {
        if let Some(change) = self.engine.set_symbol(symbol) {
            self.run_historical(change.historical).await;
            if let Some(ticket) = change.prediction {
                self.run_prediction(ticket).await;
            }
        }
    }

    pub async fn set_time_range(&mut self, range: TimeRange) {
        if let Some(ticket) = self.engine.set_time_range(range) {
            self.run_historical(ticket).await;
        }
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.engine.set_chart_type(chart_type);
    }

    pub async fn set_prediction_visible(&mut self, visible: bool) {
        if let Some(ticket) = self.engine.set_prediction_visible(visible) {
            self.run_prediction(ticket).await;
        }
    }

    pub async fn set_prediction_horizon(&mut self, horizon: PredictionHorizon) {
        if let Some(ticket) = self.engine.set_prediction_horizon(horizon) {
            self.run_prediction(ticket).await;
        }
    }

    async fn run_historical(&mut self, ticket: FetchTicket) {
        let symbol = self.engine.symbol().clone();
        let range = self.engine.config().time_range;
        match self.client.historical().daily_series(&symbol, range).await {
            Ok(series) => {
                self.engine.commit_historical(ticket, series);
            }
            Err(e) => {
                self.engine.fail_historical(ticket, &e);
            }
        }
    }

    async fn run_prediction(&mut self, ticket: FetchTicket) {
        let symbol = self.engine.symbol().clone();
        let horizon = self.engine.config().prediction_horizon;
        match self.client.predictions().forecast(&symbol, horizon).await {
            Ok(series) => {
                self.engine.commit_prediction(ticket, series);
            }
            Err(e) => {
                self.engine.fail_prediction(ticket, &e);
            }
        }
    }
}
