//! API utilities for talking to the scoring service
//!
//! Every resource is a JSON document wrapped in [`ApiEnvelope`]; the helpers
//! here turn it into a [`RemoteOutcome`] or a [`FetchError`].

use contracts::shared::ApiEnvelope;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::load_state::RemoteOutcome;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("unexpected response kind '{kind}': {message}")]
    UnexpectedKind { kind: String, message: String },
}

/// Build a full resource URL from the configured base and a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/fixtures", "/leaderboard.json");
/// ```
pub fn api_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

/// Map an envelope to an outcome: `badNotStarted` is not an error.
pub fn envelope_outcome<T>(
    envelope: ApiEnvelope<T>,
    good_kind: &str,
) -> Result<RemoteOutcome<T>, FetchError> {
    if envelope.is_not_started() {
        return Ok(RemoteOutcome::NotStarted);
    }
    match envelope.data {
        Some(data) if envelope.kind == good_kind => Ok(RemoteOutcome::Ready(data)),
        _ => Err(FetchError::UnexpectedKind {
            kind: envelope.kind,
            message: envelope.message.unwrap_or_default(),
        }),
    }
}

/// GET a JSON resource and unwrap its envelope.
pub async fn get_resource<T: DeserializeOwned>(
    url: &str,
    good_kind: &str,
) -> Result<RemoteOutcome<T>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    // Сервер может ответить badNotStarted и с не-200 статусом, поэтому сначала тело
    match serde_json::from_str::<ApiEnvelope<T>>(&text) {
        Ok(envelope) => envelope_outcome(envelope, good_kind),
        Err(_) if !response.ok() => Err(FetchError::Status(status)),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        assert_eq!(api_url("/fixtures/", "/challs.json"), "/fixtures/challs.json");
        assert_eq!(api_url("", "/challs.json"), "/challs.json");
    }

    #[test]
    fn test_envelope_outcome() {
        let good: ApiEnvelope<u32> = ApiEnvelope {
            kind: "goodLeaderboard".to_string(),
            message: None,
            data: Some(7),
        };
        assert_eq!(
            envelope_outcome(good, "goodLeaderboard"),
            Ok(RemoteOutcome::Ready(7))
        );

        assert_eq!(
            envelope_outcome(ApiEnvelope::<u32>::not_started(), "goodLeaderboard"),
            Ok(RemoteOutcome::NotStarted)
        );

        let bad: ApiEnvelope<u32> = ApiEnvelope {
            kind: "badToken".to_string(),
            message: Some("nope".to_string()),
            data: None,
        };
        assert!(matches!(
            envelope_outcome(bad, "goodLeaderboard"),
            Err(FetchError::UnexpectedKind { .. })
        ));
    }
}
