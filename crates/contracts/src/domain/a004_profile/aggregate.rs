use serde::{Deserialize, Serialize};

/// Публичный профиль команды из `/profiles/{id}.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub name: String,
    #[serde(default)]
    pub ctftime_id: Option<String>,
    pub division: String,
    #[serde(default)]
    pub score: i64,
    /// `None` while the team has no points
    #[serde(default)]
    pub division_place: Option<u64>,
    #[serde(default)]
    pub global_place: Option<u64>,
    #[serde(default)]
    pub solves: Vec<ProfileSolve>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSolve {
    pub id: String,
    pub category: String,
    pub name: String,
    pub points: i64,
    #[serde(default)]
    pub solves: i64,
    /// Unix time, milliseconds
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ApiEnvelope;

    #[test]
    fn parses_profile_dump() {
        let raw = r#"{
            "kind": "goodUserData",
            "message": "The user data was successfully retrieved.",
            "data": {
                "name": "team one",
                "ctftimeId": null,
                "division": "open",
                "score": 1250,
                "globalPlace": 3,
                "divisionPlace": 2,
                "solves": [
                    {"category":"pwn","name":"warmup","id":"c1","points":100,"solves":80,"createdAt":1707274800123}
                ]
            }
        }"#;
        let parsed: ApiEnvelope<PublicProfile> = serde_json::from_str(raw).unwrap();
        let profile = parsed.data.unwrap();
        assert_eq!(profile.global_place, Some(3));
        assert_eq!(profile.ctftime_id, None);
        assert_eq!(profile.solves[0].name, "warmup");
    }

    #[test]
    fn unranked_profile_has_no_places() {
        let raw = r#"{"name":"idle","division":"open","score":0,"globalPlace":null,"divisionPlace":null,"solves":[]}"#;
        let profile: PublicProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.division_place, None);
        assert!(profile.solves.is_empty());
    }
}
