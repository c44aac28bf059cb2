// src/screen.rs

use crate::data_source::StockSource;
use crate::detail::to_payload;
use crate::error::{LOAD_FAILURE_MESSAGE, LoadError, ParseError};
use crate::portfolio::Portfolio;
use crate::shared_types::SortBy;
use crate::simulators::ChartSynthesizer;
use crate::stocks::Stock;
use crate::types::WalletInfo;
use crate::view::ViewState;
use log::{error, info, warn};

/// Observable state of the stock list's single-shot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Pending,
    Loaded,
    Failed(String),
}

/// Handle for one load. Results are applied only if no newer load has completed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Coordinator behind the list screen. It owns the data source and the chart
/// synthesizer, keeps the latest derived snapshot, and applies the view state.
pub struct StockScreen<S: StockSource, C: ChartSynthesizer> {
    source: S,
    charts: C,
    state: LoadState,
    portfolio: Portfolio,
    view: ViewState,
    issued: u64,
    // Newest generation whose result has been applied.
    applied: u64,
    pending: Option<u64>,
}

impl<S: StockSource, C: ChartSynthesizer> StockScreen<S, C> {
    pub fn new(source: S, charts: C) -> Self {
        Self {
            source,
            charts,
            state: LoadState::Idle,
            portfolio: Portfolio::default(),
            view: ViewState::default(),
            issued: 0,
            applied: 0,
            pending: None,
        }
    }

    /// Starts a load unless one is already pending.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.pending.is_some() {
            info!("Load already pending; not starting another.");
            return None;
        }
        Some(self.issue())
    }

    /// Starts an explicit refresh, superseding any pending load.
    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.issue()
    }

    fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.state = LoadState::Pending;
        LoadTicket {
            generation: self.issued,
        }
    }

    /// Applies the outcome of a load. Returns false when the result was stale and dropped.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Stock>, LoadError>,
    ) -> bool {
        if ticket.generation <= self.applied {
            warn!(
                "Discarding load #{} (newer load #{} already applied)",
                ticket.generation, self.applied
            );
            return false;
        }
        self.applied = ticket.generation;
        let still_pending = matches!(self.pending, Some(p) if p > ticket.generation);
        if !still_pending {
            self.pending = None;
        }

        match result {
            Ok(raw) => {
                self.portfolio = Portfolio::derive(&raw, &mut self.charts);
                info!(
                    "Loaded {} stocks from {}",
                    self.portfolio.stocks.len(),
                    self.source.describe()
                );
                self.state = if still_pending {
                    LoadState::Pending
                } else {
                    LoadState::Loaded
                };
            }
            Err(e) => {
                error!("Error loading stocks: {}", e);
                self.portfolio = Portfolio::default();
                self.state = if still_pending {
                    LoadState::Pending
                } else {
                    LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
                };
            }
        }
        true
    }

    /// Initial load on mount. Does nothing while another load is pending.
    pub fn mount(&mut self) {
        if let Some(ticket) = self.begin_load() {
            let result = self.source.load_stocks();
            self.complete_load(ticket, result);
        }
    }

    /// Pull-to-refresh: reloads from the source and re-derives everything.
    pub fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let result = self.source.refresh();
        self.complete_load(ticket, result);
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Pending
    }

    /// User-visible message after a failed load.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Every derived stock, in source order.
    pub fn stocks(&self) -> &[Stock] {
        &self.portfolio.stocks
    }

    pub fn wallet(&self) -> &WalletInfo {
        &self.portfolio.wallet
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_filter<T: Into<String>>(&mut self, filter_text: T) {
        self.view.filter_text = filter_text.into();
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.view.sort_by = sort_by;
    }

    /// Filtered and sorted list, recomputed on every call.
    pub fn visible(&self) -> Vec<&Stock> {
        self.view.apply(&self.portfolio.stocks)
    }

    /// Serialized navigation parameter for the detail screen, chart data included.
    pub fn open_detail(&self, symbol: &str) -> Result<String, ParseError> {
        let stock = self
            .portfolio
            .stocks
            .iter()
            .find(|s| s.symbol == symbol)
            .ok_or_else(|| ParseError::Invalid(format!("unknown symbol {symbol}")))?;
        to_payload(stock)
    }
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CHART_POINTS;
    use crate::data_source::{FixtureSource, StaticSource};
    use crate::detail::StockDetail;
    use crate::display::format_percentage_change;
    use crate::simulators::SyntheticCharts;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    fn scenario() -> Vec<Stock> {
        vec![
            Stock::new("AAPL", "Apple Inc.", 150.0, 2.5),
            Stock::new("GOOGL", "Alphabet Inc.", 2800.0, -1.2),
            Stock::new("MSFT", "Microsoft Corporation", 280.0, 1.8),
        ]
    }

    fn screen_with(stocks: Vec<Stock>) -> StockScreen<StaticSource, SyntheticCharts<StdRng>> {
        StockScreen::new(StaticSource::new(stocks), SyntheticCharts::seeded(42))
    }

    fn symbols(view: &[&Stock]) -> Vec<String> {
        view.iter().map(|s| s.symbol.clone()).collect()
    }

    // Fails until `healthy` is flipped.
    struct FlakySource {
        healthy: Cell<bool>,
    }

    impl StockSource for FlakySource {
        fn load_stocks(&self) -> Result<Vec<Stock>, LoadError> {
            if self.healthy.get() {
                Ok(scenario())
            } else {
                Err(LoadError::Invalid("feed offline".to_string()))
            }
        }

        fn describe(&self) -> String {
            "flaky".to_string()
        }
    }

    #[test]
    fn end_to_end_filter_and_sort() {
        // Arrange
        let mut screen = screen_with(scenario());

        // Act
        screen.mount();

        // Assert
        assert_eq!(screen.state(), &LoadState::Loaded);
        assert!(screen.stocks().iter().all(|s| s.chart_data.len() == DEFAULT_CHART_POINTS));

        screen.set_filter("micro");
        assert_eq!(symbols(&screen.visible()), vec!["MSFT"]);

        screen.set_filter("xyz");
        assert!(screen.visible().is_empty());

        screen.set_filter("");
        screen.set_sort(SortBy::DailyChange);
        assert_eq!(symbols(&screen.visible()), vec!["AAPL", "MSFT", "GOOGL"]);
    }

    #[test]
    fn offsetting_holdings_render_a_flat_wallet_change() {
        // Yesterday's value nets out to zero: 100 * (1 - 1.5) + 100 * (1 - 0.5).
        let offsetting = FixtureSource::from_json(
            r#"{"stocks":[
                {"symbol":"UP","name":"Up Corp","price":100,"daily_change":150,"shares_owned":1},
                {"symbol":"DN","name":"Down Corp","price":100,"daily_change":50,"shares_owned":1}]}"#,
        );
        let mut screen = StockScreen::new(offsetting, SyntheticCharts::seeded(5));
        screen.mount();

        assert_eq!(screen.state(), &LoadState::Loaded);
        let wallet = screen.wallet();
        assert!((wallet.total_value - 200.0).abs() < 1e-9);
        assert!((wallet.daily_change_value - 200.0).abs() < 1e-9);
        assert_eq!(format_percentage_change(wallet.daily_change_percentage), "0.00%");

        let unheld = FixtureSource::from_json(
            r#"{"stocks":[
                {"symbol":"AAPL","name":"Apple Inc.","price":150,"daily_change":2.5,"shares_owned":0},
                {"symbol":"MSFT","name":"Microsoft Corporation","price":280,"daily_change":-1.8}]}"#,
        );
        let mut screen = StockScreen::new(unheld, SyntheticCharts::seeded(6));
        screen.mount();

        assert_eq!(screen.wallet().total_value, 0.0);
        assert_eq!(format_percentage_change(screen.wallet().daily_change_percentage), "0.00%");
    }

    #[test]
    fn screen_starts_idle_and_empty() {
        let screen = screen_with(scenario());
        assert_eq!(screen.state(), &LoadState::Idle);
        assert!(screen.stocks().is_empty());
        assert!(screen.error().is_none());
    }

    #[test]
    fn failed_load_shows_message_and_empty_list() {
        let mut screen = StockScreen::new(
            FlakySource {
                healthy: Cell::new(false),
            },
            SyntheticCharts::seeded(1),
        );

        screen.mount();

        assert_eq!(screen.error(), Some(LOAD_FAILURE_MESSAGE));
        assert!(screen.stocks().is_empty(), "The collection stays empty on failure.");
        assert_eq!(screen.wallet().total_value, 0.0);
        assert!(!screen.is_loading());
    }

    #[test]
    fn refresh_recovers_after_failure() {
        let mut screen = StockScreen::new(
            FlakySource {
                healthy: Cell::new(false),
            },
            SyntheticCharts::seeded(2),
        );
        screen.mount();
        assert!(screen.error().is_some());

        screen.source().healthy.set(true);
        screen.refresh();

        assert_eq!(screen.state(), &LoadState::Loaded);
        assert_eq!(screen.stocks().len(), 3);
        assert!(screen.error().is_none());
    }

    #[test]
    fn no_second_load_while_pending() {
        let mut screen = screen_with(scenario());
        let ticket = screen.begin_load().expect("first load should start");

        assert!(screen.is_loading());
        assert!(screen.begin_load().is_none(), "A pending load blocks another.");

        assert!(screen.complete_load(ticket, Ok(scenario())));
        assert!(screen.begin_load().is_some());
    }

    #[test]
    fn superseded_result_is_discarded() {
        // Arrange: an old load is still in flight when the user refreshes.
        let mut screen = screen_with(scenario());
        let old = screen.begin_load().unwrap();
        let newer = screen.begin_refresh();

        // Act: the refresh lands first, then the stale one.
        assert!(screen.complete_load(newer, Ok(scenario())));
        let applied = screen.complete_load(old, Err(LoadError::Invalid("late".to_string())));

        // Assert
        assert!(!applied, "The stale result should be dropped.");
        assert_eq!(screen.state(), &LoadState::Loaded);
        assert_eq!(screen.stocks().len(), 3);
    }

    #[test]
    fn older_result_arriving_first_keeps_screen_pending() {
        let mut screen = screen_with(scenario());
        let old = screen.begin_load().unwrap();
        let newer = screen.begin_refresh();

        assert!(screen.complete_load(old, Ok(scenario()[..1].to_vec())));
        assert!(screen.is_loading(), "The refresh is still outstanding.");
        assert_eq!(screen.stocks().len(), 1);

        assert!(screen.complete_load(newer, Ok(scenario())));
        assert_eq!(screen.state(), &LoadState::Loaded);
        assert_eq!(screen.stocks().len(), 3);
    }

    #[test]
    fn refresh_recomputes_charts_wholesale() {
        let mut screen = screen_with(scenario());
        screen.mount();
        let before = screen.stocks()[0].chart_data.clone();

        screen.refresh();

        assert_ne!(
            before,
            screen.stocks()[0].chart_data,
            "A refresh re-synthesizes every series."
        );
    }

    #[test]
    fn open_detail_round_trips_selected_stock() {
        let mut screen = screen_with(scenario());
        screen.mount();

        let payload = screen.open_detail("GOOGL").unwrap();
        let detail = StockDetail::from_payload(&payload).unwrap();

        assert_eq!(detail.stock(), &screen.stocks()[1]);
        assert!(matches!(
            screen.open_detail("NOPE"),
            Err(ParseError::Invalid(_))
        ));
    }
}
