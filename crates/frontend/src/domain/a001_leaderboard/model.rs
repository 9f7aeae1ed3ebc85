//! Scoreboard screen model: view state, the two remote datasets and their load gates.
//!
//! The leaderboard is fetched once per activation and filtered locally; the
//! graph is aggregated per division on the server and is fetched again on
//! every division change. Graph requests carry the division they were issued
//! for and a response is applied only while that division is still current.
//! The stored graph keeps that tag too, so a graph of another division is
//! never shown, even when the fetch for the new one fails.

use contracts::domain::a001_leaderboard::aggregate::RankedEntry;
use contracts::domain::a002_score_graph::aggregate::GraphPayload;

use super::pagination::{derive_filtered, derive_page, needs_pagination, total_items, RenderedEntry};
use super::view_state::{DivisionFilter, ViewState, ViewStateStore};
use crate::shared::api_utils::FetchError;
use crate::shared::load_state::{LoadState, RemoteOutcome};

/// Tag of an in-flight graph fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    pub division: DivisionFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardModel {
    view: ViewStateStore,
    raw_entries: Option<Vec<RankedEntry>>,
    /// Payload and the division it was fetched for
    graph: Option<(DivisionFilter, GraphPayload)>,
    leaderboard_state: LoadState,
    graph_state: LoadState,
}

impl ScoreboardModel {
    pub fn new(view: ViewStateStore) -> Self {
        Self {
            view,
            raw_entries: None,
            graph: None,
            leaderboard_state: LoadState::Pending,
            graph_state: LoadState::Pending,
        }
    }

    pub fn view(&self) -> &ViewStateStore {
        &self.view
    }

    pub fn view_state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn set_division(&mut self, division: DivisionFilter) {
        self.view.set_division(division);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.view.set_page_size(page_size);
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.set_page(page);
    }

    pub fn resolve_leaderboard(&mut self, result: Result<RemoteOutcome<Vec<RankedEntry>>, FetchError>) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Failed to fetch leaderboard: {}", e);
                return;
            }
        };
        self.leaderboard_state = self.leaderboard_state.resolve(&outcome);
        if let RemoteOutcome::Ready(entries) = outcome {
            log::debug!("Leaderboard loaded: {} entries", entries.len());
            self.raw_entries = Some(entries);
        }
    }

    /// Tag for a graph fetch issued now.
    pub fn begin_graph_request(&self) -> GraphRequest {
        GraphRequest {
            division: self.view.state().division.clone(),
        }
    }

    /// Apply a resolved graph fetch. Returns `false` when it was discarded as stale.
    pub fn resolve_graph(
        &mut self,
        request: &GraphRequest,
        result: Result<RemoteOutcome<GraphPayload>, FetchError>,
    ) -> bool {
        if request.division != self.view.state().division {
            log::debug!(
                "Discarding graph for '{}', current division is '{}'",
                request.division.as_str(),
                self.view.state().division.as_str()
            );
            return false;
        }
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Failed to fetch graph for '{}': {}", request.division.as_str(), e);
                return false;
            }
        };
        self.graph_state = self.graph_state.resolve(&outcome);
        if let RemoteOutcome::Ready(payload) = outcome {
            self.graph = Some((request.division.clone(), payload));
        }
        true
    }

    pub fn screen_state(&self) -> LoadState {
        self.leaderboard_state.combine(self.graph_state)
    }

    /// Graph of the current division, `None` until its fetch succeeds.
    pub fn graph(&self) -> Option<&GraphPayload> {
        match &self.graph {
            Some((division, payload)) if *division == self.view.state().division => Some(payload),
            _ => None,
        }
    }

    fn filtered(&self) -> Vec<&RankedEntry> {
        match &self.raw_entries {
            Some(raw) => derive_filtered(raw, &self.view.state().division),
            None => Vec::new(),
        }
    }

    pub fn rendered_page(&self) -> Vec<RenderedEntry> {
        let state = self.view.state();
        derive_page(&self.filtered(), state.page, state.page_size)
    }

    pub fn total_items(&self) -> usize {
        total_items(&self.filtered())
    }

    pub fn shows_pagination(&self) -> bool {
        needs_pagination(self.total_items(), self.view.state().page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_leaderboard::api::ScoreboardPort;
    use async_trait::async_trait;
    use contracts::domain::a002_score_graph::aggregate::{GraphPoint, GraphSeries};
    use std::cell::Cell;

    fn entry(i: usize, division: &str) -> RankedEntry {
        RankedEntry {
            id: format!("id-{i}"),
            name: format!("team {i}"),
            score: 1000 - i as i64,
            division: division.to_string(),
        }
    }

    fn graph_for(division: Option<&str>) -> GraphPayload {
        GraphPayload {
            graph: vec![GraphSeries {
                id: "leader".to_string(),
                name: division.unwrap_or("all").to_string(),
                points: vec![GraphPoint { time: 0, score: 0 }],
            }],
        }
    }

    fn model(page: usize, page_size: usize) -> ScoreboardModel {
        ScoreboardModel::new(ViewStateStore::from_state(ViewState {
            division: DivisionFilter::All,
            page_size,
            page,
        }))
    }

    /// Порт, который отвечает сразу и считает обращения
    #[derive(Default)]
    struct FakePort {
        graph_calls: Cell<usize>,
        not_started: bool,
    }

    #[async_trait(?Send)]
    impl ScoreboardPort for FakePort {
        async fn fetch_leaderboard(&self) -> Result<RemoteOutcome<Vec<RankedEntry>>, FetchError> {
            if self.not_started {
                return Ok(RemoteOutcome::NotStarted);
            }
            Ok(RemoteOutcome::Ready(
                (0..120)
                    .map(|i| entry(i, if i % 2 == 0 { "A" } else { "B" }))
                    .collect(),
            ))
        }

        async fn fetch_graph(&self, division: Option<&str>) -> Result<RemoteOutcome<GraphPayload>, FetchError> {
            self.graph_calls.set(self.graph_calls.get() + 1);
            Ok(RemoteOutcome::Ready(graph_for(division)))
        }
    }

    #[test]
    fn test_stale_graph_is_discarded() {
        let port = FakePort::default();
        let mut model = model(1, 50);

        model.set_division(DivisionFilter::parse("A"));
        let request_a = model.begin_graph_request();
        model.set_division(DivisionFilter::parse("B"));
        let request_b = model.begin_graph_request();

        // B отвечает первым, A после него
        let response_b = pollster::block_on(port.fetch_graph(request_b.division.code()));
        assert!(model.resolve_graph(&request_b, response_b));
        let response_a = pollster::block_on(port.fetch_graph(request_a.division.code()));
        assert!(!model.resolve_graph(&request_a, response_a));

        assert_eq!(model.graph(), Some(&graph_for(Some("B"))));
        assert_eq!(port.graph_calls.get(), 2);
    }

    #[test]
    fn test_failed_refetch_does_not_show_previous_division() {
        let port = FakePort::default();
        let mut model = model(1, 50);

        model.set_division(DivisionFilter::parse("A"));
        let request_a = model.begin_graph_request();
        assert!(model.resolve_graph(&request_a, pollster::block_on(port.fetch_graph(Some("A")))));
        assert_eq!(model.graph(), Some(&graph_for(Some("A"))));

        model.set_division(DivisionFilter::parse("B"));
        assert_eq!(model.graph(), None);

        let request_b = model.begin_graph_request();
        assert!(!model.resolve_graph(&request_b, Err(FetchError::Status(500))));
        assert_eq!(model.view_state().division, DivisionFilter::parse("B"));
        assert_eq!(model.graph(), None);
        // экран не возвращается в ожидание
        assert_eq!(model.graph_state, LoadState::Ready);
    }

    #[test]
    fn test_screen_waits_for_both_resources() {
        let port = FakePort::default();
        let mut model = model(1, 50);
        assert_eq!(model.screen_state(), LoadState::Pending);

        model.resolve_leaderboard(pollster::block_on(port.fetch_leaderboard()));
        assert_eq!(model.screen_state(), LoadState::Pending);
        // данные уже можно пересчитать, хотя экран ещё ждёт график
        assert_eq!(model.total_items(), 120);

        let request = model.begin_graph_request();
        model.resolve_graph(&request, pollster::block_on(port.fetch_graph(None)));
        assert_eq!(model.screen_state(), LoadState::Ready);
    }

    #[test]
    fn test_not_started_from_either_resource() {
        let port = FakePort {
            not_started: true,
            ..FakePort::default()
        };
        let mut model = model(1, 50);
        model.resolve_leaderboard(pollster::block_on(port.fetch_leaderboard()));
        assert_eq!(model.screen_state(), LoadState::NotStarted);

        let request = model.begin_graph_request();
        model.resolve_graph(&request, pollster::block_on(port.fetch_graph(None)));
        assert_eq!(model.screen_state(), LoadState::NotStarted);
    }

    #[test]
    fn test_fetch_failure_keeps_screen_pending() {
        let mut model = model(1, 50);
        model.resolve_leaderboard(Err(FetchError::Status(502)));
        let request = model.begin_graph_request();
        assert!(!model.resolve_graph(&request, Err(FetchError::Transport("offline".to_string()))));

        assert_eq!(model.screen_state(), LoadState::Pending);
        assert!(model.rendered_page().is_empty());
        assert_eq!(model.total_items(), 0);
        assert!(!model.shows_pagination());
    }

    #[test]
    fn test_division_change_refilters_locally() {
        let port = FakePort::default();
        let mut model = model(3, 50);
        model.resolve_leaderboard(pollster::block_on(port.fetch_leaderboard()));

        let page = model.rendered_page();
        assert_eq!(page.len(), 20);
        assert_eq!(page[0].rank, 101);
        assert!(model.shows_pagination());

        model.set_division(DivisionFilter::parse("B"));
        let page = model.rendered_page();
        assert_eq!(model.view_state().page, 1);
        assert_eq!(model.total_items(), 60);
        assert_eq!(page.len(), 50);
        assert_eq!(page[0].entry.id, "id-1");
        assert_eq!(page[0].rank, 1);
    }

    #[test]
    fn test_out_of_range_page_renders_empty() {
        let port = FakePort::default();
        let mut model = model(1, 25);
        model.resolve_leaderboard(pollster::block_on(port.fetch_leaderboard()));
        model.set_page(40);
        assert!(model.rendered_page().is_empty());
        assert_eq!(model.total_items(), 120);
    }
}
