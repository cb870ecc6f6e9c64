mod challenge;
mod community;
mod error;
mod matching;
mod review;
mod validation;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use challenge::{
    Challenge, ChallengeType, DEVELOP_MARATHON_MATCH, MARATHON_MATCH, update_challenge_type,
};
pub use community::{disable_clear_save_filter_buttons, is_visitor_registered_to_community};
pub use error::{FilterError, Result};
pub use matching::filter_challenges;
pub use review::{ReviewOpportunityType, UNFILTERED_REVIEW_TYPE};
pub use validation::{
    DateRangeError, DateRangeValidation, SelectionError, SelectionValidation, ValidationState,
};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Active filter criteria of a challenge listing.
///
/// Every field is optional and the empty record means "no filtering".
/// Unset criteria are absent, both in memory and in JSON. Records are never
/// mutated in place: each setter returns a new record that differs from its
/// input in exactly one field.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Selected keywords, in selection order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtracks: Option<Vec<String>>,
    /// Sub-community; absent means "All".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Inclusive lower bound, ISO-8601 date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper bound, ISO-8601 date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// A raw `0` in JSON reads as absent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "review::deserialize_optional"
    )]
    pub review_opportunity_type: Option<ReviewOpportunityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

impl FilterState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tags: None,
            subtracks: None,
            group_id: None,
            start_date: None,
            end_date: None,
            review_opportunity_type: None,
            search_text: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tags.is_none()
            && self.subtracks.is_none()
            && self.group_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.review_opportunity_type.is_none()
            && self.search_text.is_none()
    }

    #[must_use]
    pub fn set_tags(&self, tags: Option<Vec<String>>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn set_subtracks(&self, subtracks: Option<Vec<String>>) -> Self {
        Self {
            subtracks,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn set_group_id(&self, group_id: Option<String>) -> Self {
        Self {
            group_id,
            ..self.clone()
        }
    }

    /// Bounds are stored as given; ordering is checked by whoever produces
    /// them (see [`DateRangeValidation`]).
    #[must_use]
    pub fn set_start_date(&self, start_date: Option<String>) -> Self {
        Self {
            start_date,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn set_end_date(&self, end_date: Option<String>) -> Self {
        Self {
            end_date,
            ..self.clone()
        }
    }

    /// Stores the value as given. Callers holding a raw `0` map it to `None`
    /// through [`ReviewOpportunityType::from_value`].
    #[must_use]
    pub fn set_review_opportunity_type(
        &self,
        review_opportunity_type: Option<ReviewOpportunityType>,
    ) -> Self {
        Self {
            review_opportunity_type,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn set_search_text(&self, search_text: Option<String>) -> Self {
        Self {
            search_text,
            ..self.clone()
        }
    }

    /// # Errors
    ///
    /// Fails only if serialization itself fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns [`FilterError::SerdeJson`] for malformed input or an unknown
    /// review type.
    pub fn from_json(value: &str) -> Result<Self> {
        Ok(serde_json::from_str(value)?)
    }
}

/// # Errors
///
/// Returns [`FilterError::InvalidDate`] unless `value` is `YYYY-MM-DD`.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|source| FilterError::InvalidDate {
        value: value.to_owned(),
        source,
    })
}

#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
