use contracts::domain::a004_profile::aggregate::PublicProfile;
use contracts::shared::api_envelope::KIND_GOOD_USER_DATA;

use crate::shared::api_utils::{api_url, get_resource, FetchError};
use crate::shared::load_state::RemoteOutcome;

pub fn profile_path(team_id: &str) -> String {
    format!("/profiles/{}.json", urlencoding::encode(team_id))
}

/// GET `{api_base}/profiles/{id}.json`
pub async fn fetch_profile(
    api_base: &str,
    team_id: &str,
) -> Result<RemoteOutcome<PublicProfile>, FetchError> {
    let url = api_url(api_base, &profile_path(team_id));
    get_resource::<PublicProfile>(&url, KIND_GOOD_USER_DATA).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path_is_encoded() {
        assert_eq!(
            profile_path("3c1e0b5a-1111-2222-3333-444455556666"),
            "/profiles/3c1e0b5a-1111-2222-3333-444455556666.json"
        );
        assert_eq!(profile_path("../x"), "/profiles/..%2Fx.json");
    }
}
