use serde::{Deserialize, Serialize};

/// One sample of a team's score over time. `time` is a unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub time: i64,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSeries {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub points: Vec<GraphPoint>,
}

/// `data` of a `goodLeaderboard` response for `/graphs/graph[-<division>].json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub graph: Vec<GraphSeries>,
}
