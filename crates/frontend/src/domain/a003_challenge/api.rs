use contracts::domain::a003_challenge::aggregate::{Challenge, ChallengeSolvesData};
use contracts::shared::api_envelope::{KIND_GOOD_CHALLENGES, KIND_GOOD_CHALLENGE_SOLVES};

use crate::shared::api_utils::{api_url, get_resource, FetchError};
use crate::shared::load_state::RemoteOutcome;

/// GET `{api_base}/challs.json`
pub async fn fetch_challenges(api_base: &str) -> Result<RemoteOutcome<Vec<Challenge>>, FetchError> {
    let url = api_url(api_base, "/challs.json");
    get_resource::<Vec<Challenge>>(&url, KIND_GOOD_CHALLENGES).await
}

pub fn solves_path(challenge_id: &str) -> String {
    format!("/solves/{}.json", urlencoding::encode(challenge_id))
}

/// GET `{api_base}/solves/{id}.json`
pub async fn fetch_solves(
    api_base: &str,
    challenge_id: &str,
) -> Result<RemoteOutcome<ChallengeSolvesData>, FetchError> {
    let url = api_url(api_base, &solves_path(challenge_id));
    get_resource::<ChallengeSolvesData>(&url, KIND_GOOD_CHALLENGE_SOLVES).await
}
