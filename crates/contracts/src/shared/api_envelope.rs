use serde::{Deserialize, Serialize};

/// Ответ сервиса соревнования: `kind` определяет, что лежит в `data`
pub const KIND_NOT_STARTED: &str = "badNotStarted";
pub const KIND_GOOD_LEADERBOARD: &str = "goodLeaderboard";
pub const KIND_GOOD_CHALLENGES: &str = "goodChallenges";
pub const KIND_GOOD_CHALLENGE_SOLVES: &str = "goodChallengeSolves";
pub const KIND_GOOD_USER_DATA: &str = "goodUserData";

pub const NOT_STARTED_MESSAGE: &str = "The CTF has not started yet.";

/// Envelope every scoring-service response is wrapped in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn not_started() -> Self {
        Self {
            kind: KIND_NOT_STARTED.to_string(),
            message: Some(NOT_STARTED_MESSAGE.to_string()),
            data: None,
        }
    }

    pub fn is_not_started(&self) -> bool {
        self.kind == KIND_NOT_STARTED
    }
}
