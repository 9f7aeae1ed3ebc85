use serde::{Deserialize, Serialize};

/// Запись рейтинга в том порядке, в котором её отдал сервер
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: String,
    pub name: String,
    pub score: i64,
    #[serde(default)]
    pub division: String,
}

/// `data` of a `goodLeaderboard` response for `/leaderboard.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardData {
    #[serde(default)]
    pub total: usize,
    pub leaderboard: Vec<RankedEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ApiEnvelope;

    #[test]
    fn parses_archived_leaderboard() {
        let raw = r#"{
            "kind": "goodLeaderboard",
            "message": "The leaderboard has been retrieved.",
            "data": {
                "total": 2,
                "leaderboard": [
                    {"id": "a1", "name": "alpha", "score": 1200, "division": "open"},
                    {"id": "b2", "name": "beta", "score": 900, "division": "student"}
                ]
            }
        }"#;

        let parsed: ApiEnvelope<LeaderboardData> = serde_json::from_str(raw).unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.total, 2);
        assert_eq!(data.leaderboard[0].name, "alpha");
        assert_eq!(data.leaderboard[1].division, "student");
    }
}
