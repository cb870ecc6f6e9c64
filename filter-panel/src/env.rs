use crate::options::ALL_COMMUNITIES;

pub const ENV_DEFAULT_COMMUNITY: &str = "CHALLENGE_FILTERS_DEFAULT_COMMUNITY";

/// Community the listing shows when nothing else is selected.
#[must_use]
pub fn default_community_id() -> String {
    std::env::var(ENV_DEFAULT_COMMUNITY)
        .ok()
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| String::from(ALL_COMMUNITIES))
}
