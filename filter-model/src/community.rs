use std::collections::HashSet;

use crate::FilterState;

/// True iff the visitor shares at least one group with the community.
#[must_use]
pub fn is_visitor_registered_to_community<V, C>(
    visitor_group_ids: &[V],
    community_group_ids: &[C],
) -> bool
where
    V: AsRef<str>,
    C: AsRef<str>,
{
    let visitor: HashSet<&str> = visitor_group_ids.iter().map(AsRef::as_ref).collect();

    community_group_ids
        .iter()
        .any(|id| visitor.contains(id.as_ref()))
}

/// Clear and save are pointless while a save is running, or while the
/// panel still shows the default community with nothing filtered.
#[must_use]
pub fn disable_clear_save_filter_buttons(
    is_saving_filter: bool,
    selected_community_id: &str,
    default_community_id: &str,
    filter_state: &FilterState,
) -> bool {
    is_saving_filter
        || (selected_community_id == default_community_id && filter_state.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    const NO_GROUPS: [&str; 0] = [];

    #[test]
    fn test_no_visitor_groups() {
        assert!(!is_visitor_registered_to_community(&NO_GROUPS, &["g1", "g2"]));
        assert!(!is_visitor_registered_to_community(&NO_GROUPS, &NO_GROUPS));
    }

    #[test]
    fn test_intersection() {
        assert!(is_visitor_registered_to_community(&["g1"], &["g1", "g2"]));
        assert!(!is_visitor_registered_to_community(&["g1"], &["g2"]));
        assert!(is_visitor_registered_to_community(
            &[String::from("g3"), String::from("g2")],
            &["g2"]
        ));
    }

    #[test]
    fn test_gating_default_community_empty_state() {
        assert!(disable_clear_save_filter_buttons(
            false,
            "all",
            "all",
            &FilterState::new()
        ));
    }

    #[test]
    fn test_gating_any_field_enables() {
        let state = FilterState::new().set_tags(Some(vec![String::from("java")]));
        assert!(!disable_clear_save_filter_buttons(false, "all", "all", &state));

        let state = FilterState::new().set_search_text(Some(String::from("sort")));
        assert!(!disable_clear_save_filter_buttons(false, "all", "all", &state));
    }

    #[test]
    fn test_gating_other_community_enables() {
        assert!(!disable_clear_save_filter_buttons(
            false,
            "tco",
            "all",
            &FilterState::new()
        ));
    }

    #[test]
    fn test_gating_while_saving() {
        let state = FilterState::new().set_subtracks(Some(vec![String::from("CODE")]));
        assert!(disable_clear_save_filter_buttons(true, "tco", "all", &state));
    }
}
