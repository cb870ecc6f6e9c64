use filter_model::{ReviewOpportunityType, UNFILTERED_REVIEW_TYPE, is_visitor_registered_to_community};
use serde::Serialize;

use crate::Community;

pub const ALL_COMMUNITIES: &str = "all";
pub const ALL_LABEL: &str = "All";
pub const MULTI_VALUE_SEPARATOR: &str = ",";

const NOT_REGISTERED_TOOLTIP: &str = "You are not registered to this community";

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Options whose label and value are the same string.
#[must_use]
pub fn item_options(items: &[String]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption::new(item.as_str(), item.as_str()))
        .collect()
}

/// The embedded-community dropdown: the community itself, then "All".
#[must_use]
pub fn community_options(
    challenge_group_id: Option<&str>,
    community_name: Option<&str>,
) -> Option<Vec<SelectOption>> {
    if challenge_group_id.is_none() {
        return None;
    }

    let name = community_name.unwrap_or_default();

    Some(vec![
        SelectOption::new(name, name),
        SelectOption::new(ALL_LABEL, ALL_COMMUNITIES),
    ])
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubCommunityOption {
    pub label: String,
    pub value: String,
    pub registered: bool,
}

impl SubCommunityOption {
    #[must_use]
    pub const fn tooltip(&self) -> Option<&'static str> {
        if self.registered {
            None
        } else {
            Some(NOT_REGISTERED_TOOLTIP)
        }
    }
}

/// Every community is listed; `registered` only drives the label tooltip.
#[must_use]
pub fn sub_community_options(
    communities: &[Community],
    visitor_group_ids: &[String],
) -> Vec<SubCommunityOption> {
    communities
        .iter()
        .map(|community| SubCommunityOption {
            label: community.name.clone(),
            value: community.id.clone(),
            registered: community.group_ids.is_empty()
                || is_visitor_registered_to_community(visitor_group_ids, &community.group_ids),
        })
        .collect()
}

/// "All" followed by every known review type, valued by its number.
#[must_use]
pub fn review_type_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(
        ALL_LABEL,
        UNFILTERED_REVIEW_TYPE.to_string(),
    ))
    .chain(
        ReviewOpportunityType::all()
            .map(|kind| SelectOption::new(kind.label(), kind.value().to_string())),
    )
    .collect()
}

/// Splits a comma-joined dropdown value; nothing selected yields `None`.
#[must_use]
pub fn split_multi_value(value: Option<&str>) -> Option<Vec<String>> {
    let items: Vec<String> = value?
        .split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();

    (!items.is_empty()).then_some(items)
}

#[must_use]
pub fn join_multi_value(items: Option<&[String]>) -> Option<String> {
    items
        .filter(|items| !items.is_empty())
        .map(|items| items.join(MULTI_VALUE_SEPARATOR))
}
