use async_trait::async_trait;
use contracts::domain::a001_leaderboard::aggregate::{LeaderboardData, RankedEntry};
use contracts::domain::a002_score_graph::aggregate::GraphPayload;
use contracts::shared::api_envelope::KIND_GOOD_LEADERBOARD;

use crate::shared::api_utils::{api_url, get_resource, FetchError};
use crate::shared::load_state::RemoteOutcome;

/// Remote resources behind the scoreboard screen.
#[async_trait(?Send)]
pub trait ScoreboardPort {
    /// Full ranked list in server order.
    async fn fetch_leaderboard(&self) -> Result<RemoteOutcome<Vec<RankedEntry>>, FetchError>;

    /// Score graph, aggregated for `division` or for everybody when `None`.
    async fn fetch_graph(&self, division: Option<&str>) -> Result<RemoteOutcome<GraphPayload>, FetchError>;
}

/// Static competition archive served over HTTP.
#[derive(Clone, Debug)]
pub struct HttpScoreboardPort {
    api_base: String,
}

impl HttpScoreboardPort {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

/// `/graphs/graph.json` or `/graphs/graph-<division>.json`
pub fn graph_path(division: Option<&str>) -> String {
    match division {
        Some(code) => format!("/graphs/graph-{}.json", urlencoding::encode(code)),
        None => "/graphs/graph.json".to_string(),
    }
}

#[async_trait(?Send)]
impl ScoreboardPort for HttpScoreboardPort {
    async fn fetch_leaderboard(&self) -> Result<RemoteOutcome<Vec<RankedEntry>>, FetchError> {
        let url = api_url(&self.api_base, "/leaderboard.json");
        let outcome = get_resource::<LeaderboardData>(&url, KIND_GOOD_LEADERBOARD).await?;
        Ok(outcome.map(|data| data.leaderboard))
    }

    async fn fetch_graph(&self, division: Option<&str>) -> Result<RemoteOutcome<GraphPayload>, FetchError> {
        let url = api_url(&self.api_base, &graph_path(division));
        get_resource::<GraphPayload>(&url, KIND_GOOD_LEADERBOARD).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_path() {
        assert_eq!(graph_path(None), "/graphs/graph.json");
        assert_eq!(graph_path(Some("open")), "/graphs/graph-open.json");
        assert_eq!(graph_path(Some("high school")), "/graphs/graph-high%20school.json");
    }
}
