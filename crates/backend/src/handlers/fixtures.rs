use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::ApiEnvelope;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::shared::config::CompetitionConfig;

#[derive(Clone)]
pub struct FixtureState {
    pub fixtures_dir: PathBuf,
    pub competition: CompetitionConfig,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid fixture path: {0}")]
    InvalidPath(String),

    #[error("fixture not found: {0}")]
    NotFound(String),

    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        let status = match &self {
            FixtureError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            FixtureError::NotFound(_) => StatusCode::NOT_FOUND,
            FixtureError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}

/// Relative path made of `[A-Za-z0-9._-]` segments, no `..`, no empty segments.
pub fn validate_fixture_path(raw: &str) -> Result<PathBuf, FixtureError> {
    let mut path = PathBuf::new();
    for segment in raw.split('/') {
        let valid = !segment.is_empty()
            && segment != "."
            && segment != ".."
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(FixtureError::InvalidPath(raw.to_string()));
        }
        path.push(segment);
    }
    Ok(path)
}

/// Resources that do not exist before the competition opens
pub fn is_gated(raw: &str) -> bool {
    raw == "leaderboard.json" || raw == "challs.json" || raw.starts_with("graphs/")
}

/// GET /fixtures/*path
pub async fn get_fixture(
    State(state): State<Arc<FixtureState>>,
    Path(raw): Path<String>,
) -> Result<Response, FixtureError> {
    let relative = validate_fixture_path(&raw)?;

    if is_gated(&raw) && !state.competition.has_started(chrono::Utc::now()) {
        return Ok(Json(ApiEnvelope::<()>::not_started()).into_response());
    }

    let full_path = state.fixtures_dir.join(relative);
    let body = match tokio::fs::read(&full_path).await {
        Ok(body) => body,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FixtureError::NotFound(raw));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
