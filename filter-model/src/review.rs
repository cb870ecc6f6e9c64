use std::fmt;

use serde::{Deserialize, Deserializer, de};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::{FilterError, Result};

/// Value a review-type dropdown emits for "All".
pub const UNFILTERED_REVIEW_TYPE: u8 = 0;

/// Kind of review opportunity a challenge offers.
///
/// Serialized as its integer value. `0` is never a variant: an unfiltered
/// state is expressed by leaving the field out of the record.
#[derive(
    Serialize_repr, Deserialize_repr, EnumIter, Debug, Copy, Clone, Eq, PartialEq, Hash,
)]
#[repr(u8)]
pub enum ReviewOpportunityType {
    Review = 1,
    SpecificationReview = 2,
    IterativeReview = 3,
}

impl ReviewOpportunityType {
    /// Maps a raw dropdown value, `0` meaning "no filter".
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownReviewOpportunityType`] for values
    /// outside the enum.
    pub fn from_value(value: u8) -> Result<Option<Self>> {
        match value {
            UNFILTERED_REVIEW_TYPE => Ok(None),
            1 => Ok(Some(Self::Review)),
            2 => Ok(Some(Self::SpecificationReview)),
            3 => Ok(Some(Self::IterativeReview)),
            _ => Err(FilterError::UnknownReviewOpportunityType(value)),
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::SpecificationReview => "Specification Review",
            Self::IterativeReview => "Iterative Review",
        }
    }

    /// All known types in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Reads an optional raw type where `0` stands for "no filter", so a
/// record carrying `0` deserializes with the field absent.
pub(crate) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<ReviewOpportunityType>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u8>::deserialize(deserializer)?.map_or(Ok(None), |value| {
        ReviewOpportunityType::from_value(value).map_err(de::Error::custom)
    })
}

impl fmt::Display for ReviewOpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_means_unfiltered() {
        assert!(matches!(
            ReviewOpportunityType::from_value(UNFILTERED_REVIEW_TYPE),
            Ok(None)
        ));
    }

    #[test]
    fn test_known_values() {
        assert!(matches!(
            ReviewOpportunityType::from_value(2),
            Ok(Some(ReviewOpportunityType::SpecificationReview))
        ));
        assert_eq!(ReviewOpportunityType::IterativeReview.value(), 3);
    }

    #[test]
    fn test_unknown_value() {
        assert!(matches!(
            ReviewOpportunityType::from_value(9),
            Err(FilterError::UnknownReviewOpportunityType(9))
        ));
    }

    #[test]
    fn test_all_in_order() {
        let labels: Vec<String> = ReviewOpportunityType::all()
            .map(|t| t.to_string())
            .collect();

        assert_eq!(
            labels,
            vec![
                String::from("Review"),
                String::from("Specification Review"),
                String::from("Iterative Review"),
            ]
        );
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ReviewOpportunityType::Review).unwrap();
        assert_eq!(json, "1");

        let parsed: std::result::Result<ReviewOpportunityType, _> = serde_json::from_str("0");
        assert!(parsed.is_err());
    }

    #[derive(serde::Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional")]
        kind: Option<ReviewOpportunityType>,
    }

    #[test]
    fn test_optional_zero_is_absent() {
        let holder: Holder = serde_json::from_str(r#"{"kind":0}"#).unwrap();
        assert_eq!(holder.kind, None);

        let holder: Holder = serde_json::from_str(r#"{"kind":null}"#).unwrap();
        assert_eq!(holder.kind, None);

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.kind, None);

        let holder: Holder = serde_json::from_str(r#"{"kind":1}"#).unwrap();
        assert_eq!(holder.kind, Some(ReviewOpportunityType::Review));
    }

    #[test]
    fn test_optional_unknown_rejected() {
        let parsed: std::result::Result<Holder, _> = serde_json::from_str(r#"{"kind":7}"#);
        let message = parsed.err().unwrap().to_string();
        assert!(message.contains("Unknown Review Opportunity Type: 7"));
    }
}
