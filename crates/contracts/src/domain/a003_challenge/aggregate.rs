use serde::{Deserialize, Serialize};

/// Задача соревнования из `/challs.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub files: Vec<ChallengeFile>,
    pub points: i64,
    #[serde(default)]
    pub solves: i64,
    #[serde(default)]
    pub sort_weight: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeFile {
    pub name: String,
    pub url: String,
}

/// Решение задачи из `/solves/{id}.json`, порядок сервера (по времени)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSolve {
    pub id: String,
    /// Unix time, milliseconds
    pub created_at: i64,
    pub user_id: String,
    pub user_name: String,
}

/// `data` of a `goodChallengeSolves` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSolvesData {
    pub solves: Vec<ChallengeSolve>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_weight_is_optional() {
        let raw = r#"{"id":"c1","name":"warmup","category":"misc","points":100,"solves":42}"#;
        let chall: Challenge = serde_json::from_str(raw).unwrap();
        assert_eq!(chall.sort_weight, None);
        assert!(chall.files.is_empty());

        let raw = r#"{"id":"c2","name":"pwn me","category":"pwn","points":500,"solves":1,"sortWeight":3}"#;
        let chall: Challenge = serde_json::from_str(raw).unwrap();
        assert_eq!(chall.sort_weight, Some(3));
    }

    #[test]
    fn parses_solves_dump() {
        let raw = r#"{"kind":"goodChallengeSolves","message":"ok","data":{"solves":[
            {"id":"s1","createdAt":1707274800123,"userId":"u1","userName":"team one"}
        ]}}"#;
        let parsed: crate::shared::ApiEnvelope<ChallengeSolvesData> = serde_json::from_str(raw).unwrap();
        let solves = parsed.data.unwrap().solves;
        assert_eq!(solves.len(), 1);
        assert_eq!(solves[0].user_name, "team one");
        assert_eq!(solves[0].created_at, 1707274800123);
    }
}
