use std::{collections::HashMap, hash::BuildHasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ReviewOpportunityType;

pub const MARATHON_MATCH: &str = "Marathon Match";
pub const DEVELOP_MARATHON_MATCH: &str = "Develop Marathon Match";

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeType {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub type_id: String,
    #[serde(default)]
    pub sub_track: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub registration_start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submission_end_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::review::deserialize_optional"
    )]
    pub review_opportunity_type: Option<ReviewOpportunityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_type: Option<ChallengeType>,
}

impl Challenge {
    #[must_use]
    pub fn is_mm(&self) -> bool {
        self.kind == MARATHON_MATCH
    }

    #[must_use]
    pub fn is_develop_mm(&self) -> bool {
        self.kind == DEVELOP_MARATHON_MATCH
    }
}

/// Resolves `challenge_type` from `type_id` for every challenge.
///
/// Ids missing from the map resolve to an empty type. Without a map the
/// challenges are left untouched.
pub fn update_challenge_type<S: BuildHasher>(
    challenges: &mut [Challenge],
    challenge_type_map: Option<&HashMap<String, ChallengeType, S>>,
) {
    let Some(type_map) = challenge_type_map else {
        return;
    };

    for challenge in challenges.iter_mut() {
        challenge.challenge_type =
            Some(type_map.get(&challenge.type_id).cloned().unwrap_or_default());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn challenge(kind: &str, type_id: &str) -> Challenge {
        Challenge {
            id: String::from("30100000"),
            name: String::from("Sorting Marathon"),
            kind: kind.into(),
            type_id: type_id.into(),
            ..Challenge::default()
        }
    }

    #[test]
    fn test_marathon_kinds() {
        assert!(challenge(MARATHON_MATCH, "mm").is_mm());
        assert!(!challenge(MARATHON_MATCH, "mm").is_develop_mm());
        assert!(challenge(DEVELOP_MARATHON_MATCH, "dmm").is_develop_mm());
        assert!(!challenge("Code", "code").is_mm());
    }

    #[test]
    fn test_update_challenge_type() {
        let code = ChallengeType {
            id: String::from("code"),
            name: String::from("Code"),
            abbreviation: String::from("CO"),
        };
        let map = HashMap::from([(String::from("code"), code.clone())]);
        let mut challenges = vec![challenge("Code", "code"), challenge("Other", "missing")];

        update_challenge_type(&mut challenges, Some(&map));

        assert_eq!(challenges[0].challenge_type, Some(code));
        assert_eq!(challenges[1].challenge_type, Some(ChallengeType::default()));
    }

    #[test]
    fn test_update_challenge_type_without_map() {
        let mut challenges = vec![challenge("Code", "code")];

        update_challenge_type::<std::collections::hash_map::RandomState>(&mut challenges, None);

        assert_eq!(challenges[0].challenge_type, None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "30100001",
            "name": "Tiny Sort",
            "type": "Marathon Match",
            "typeId": "mm",
            "subTrack": "MARATHON_MATCH",
            "tags": ["Algorithms"],
            "groups": ["g1"],
            "registrationStartDate": "2024-01-10T00:00:00Z",
            "reviewOpportunityType": 2
        }"#;

        let parsed: Challenge = serde_json::from_str(json).unwrap();

        assert!(parsed.is_mm());
        assert_eq!(parsed.sub_track, "MARATHON_MATCH");
        assert_eq!(
            parsed.review_opportunity_type,
            Some(ReviewOpportunityType::SpecificationReview)
        );
        assert!(parsed.registration_start_date.is_some());
        assert_eq!(parsed.submission_end_date, None);
    }
}
