use chrono::NaiveDate;
use filter_model::{
    DateRangeError, DateRangeValidation, FilterState, ReviewOpportunityType, SelectionError,
    SelectionValidation, disable_clear_save_filter_buttons, format_iso_date,
};
use serde::Serialize;

use crate::{
    FilterHost, PanelConfig, PanelError, Result,
    options::{
        ALL_COMMUNITIES, SelectOption, SubCommunityOption, community_options, item_options,
        join_multi_value, review_type_options, split_multi_value, sub_community_options,
    },
};

/// Everything a renderer needs to draw the panel for one state.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub hidden: bool,
    pub in_group: bool,
    pub keyword_options: Vec<SelectOption>,
    pub keywords_value: Option<String>,
    pub subtrack_options: Vec<SelectOption>,
    pub subtracks_value: Option<String>,
    pub community_options: Option<Vec<SelectOption>>,
    pub community_value: String,
    pub sub_community_options: Vec<SubCommunityOption>,
    pub selected_community_id: String,
    pub review_type_options: Vec<SelectOption>,
    pub review_type_value: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search_text: String,
    pub clear_save_disabled: bool,
}

/// Turns widget events into [`FilterState`] transitions.
///
/// The panel keeps a mirror of the host's current record. Every accepted
/// event produces a new record which is stored and handed to
/// [`FilterHost::set_filter_state`]; rejected events leave both untouched.
pub struct FiltersPanel<H> {
    config: PanelConfig,
    host: H,
    filter_state: FilterState,
    selected_community_id: String,
    is_saving_filter: bool,
}

impl<H: FilterHost> FiltersPanel<H> {
    #[must_use]
    pub fn new(config: PanelConfig, host: H) -> Self {
        let selected_community_id = config.default_community_id.clone();

        Self {
            config,
            host,
            filter_state: FilterState::new(),
            selected_community_id,
            is_saving_filter: false,
        }
    }

    #[must_use]
    pub fn with_filter_state(mut self, filter_state: FilterState) -> Self {
        self.filter_state = filter_state;
        self
    }

    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    /// New values from the host after it re-rendered.
    pub fn set_props(
        &mut self,
        filter_state: FilterState,
        selected_community_id: &str,
        is_saving_filter: bool,
    ) {
        if self.filter_state != filter_state {
            tracing::debug!("filter state replaced by host");
            self.filter_state = filter_state;
        }

        selected_community_id.clone_into(&mut self.selected_community_id);
        self.is_saving_filter = is_saving_filter;
    }

    /// # Errors
    ///
    /// Rejects keywords the host did not offer.
    pub fn keywords_changed(&mut self, value: Option<&str>) -> Result<()> {
        let tags = split_multi_value(value);
        check_selection(tags.as_deref(), &self.config.valid_keywords)?;

        let state = self.filter_state.set_tags(tags);
        self.emit(state);
        Ok(())
    }

    /// # Errors
    ///
    /// Rejects sub-tracks the host did not offer.
    pub fn subtracks_changed(&mut self, value: Option<&str>) -> Result<()> {
        let subtracks = split_multi_value(value);
        check_selection(subtracks.as_deref(), &self.config.valid_subtracks)?;

        let state = self.filter_state.set_subtracks(subtracks);
        self.emit(state);
        Ok(())
    }

    /// `"all"` drops the group, any other value scopes to the embedding
    /// community.
    pub fn community_changed(&mut self, value: &str) {
        let group_id = if value == ALL_COMMUNITIES {
            None
        } else {
            self.config.challenge_group_id.clone()
        };

        let state = self.filter_state.set_group_id(group_id);
        self.emit(state);
    }

    /// # Errors
    ///
    /// Rejects ids that are neither a configured community nor the default.
    pub fn sub_community_selected(&mut self, community_id: &str) -> Result<()> {
        if community_id != self.config.default_community_id
            && self.config.community(community_id).is_none()
        {
            tracing::warn!(community_id, "unknown community selected");
            return Err(PanelError::UnknownOption(community_id.to_owned()));
        }

        tracing::debug!(community_id, "community selected");
        community_id.clone_into(&mut self.selected_community_id);
        self.host.select_community(community_id);
        Ok(())
    }

    /// Both bounds are applied as one change.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvertedDateRange`] when `start` is after `end`.
    pub fn dates_changed(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
        let start = start.map(format_iso_date);
        let end = end.map(format_iso_date);

        let mut validation = DateRangeValidation::default();
        validation.check(start.as_deref(), end.as_deref());

        // formatted bounds always parse, so ordering is the only failure
        if let Some(DateRangeError::Inverted(start, end)) = validation.range.into_error() {
            tracing::warn!(%start, %end, "inverted date range rejected");
            return Err(PanelError::InvertedDateRange { start, end });
        }

        let state = self.filter_state.set_start_date(start).set_end_date(end);
        self.emit(state);
        Ok(())
    }

    /// `0` removes the filter.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Filter`] for values outside the enum.
    pub fn review_type_changed(&mut self, value: u8) -> Result<()> {
        let kind = ReviewOpportunityType::from_value(value).inspect_err(|e| {
            tracing::warn!("review type rejected: {e}");
        })?;

        let state = self.filter_state.set_review_opportunity_type(kind);
        self.emit(state);
        Ok(())
    }

    pub fn search_text_changed(&mut self, text: &str) {
        let text = text.trim();
        let search_text = (!text.is_empty()).then(|| text.to_owned());

        let state = self.filter_state.set_search_text(search_text);
        self.emit(state);
    }

    /// Resets to the empty record. Only the host's clear hook is called, not
    /// `set_filter_state`. Gated like [`Self::save`]; returns whether the
    /// clear happened.
    pub fn clear(&mut self) -> bool {
        if self.clear_save_disabled() {
            tracing::warn!(saving = self.is_saving_filter, "clear ignored");
            return false;
        }

        tracing::info!("filters cleared");
        self.host.clear_filters();
        self.filter_state = FilterState::new();
        true
    }

    /// Returns whether the save hook was called.
    pub fn save(&self) -> bool {
        if self.clear_save_disabled() {
            tracing::warn!(saving = self.is_saving_filter, "save ignored");
            return false;
        }

        tracing::info!(community = %self.selected_community_id, "saving filter");
        self.host.save_filter();
        true
    }

    pub fn close(&self) {
        self.host.close();
    }

    #[must_use]
    pub fn clear_save_disabled(&self) -> bool {
        disable_clear_save_filter_buttons(
            self.is_saving_filter,
            &self.selected_community_id,
            &self.config.default_community_id,
            &self.filter_state,
        )
    }

    #[must_use]
    pub fn view(&self) -> PanelView {
        let config = &self.config;
        let state = &self.filter_state;

        let community_value = state
            .group_id
            .as_ref()
            .and(config.community_name.clone())
            .unwrap_or_else(|| String::from(ALL_COMMUNITIES));

        PanelView {
            hidden: config.hidden,
            in_group: config.challenge_group_id.is_some(),
            keyword_options: item_options(&config.valid_keywords),
            keywords_value: join_multi_value(state.tags.as_deref()),
            subtrack_options: item_options(&config.valid_subtracks),
            subtracks_value: join_multi_value(state.subtracks.as_deref()),
            community_options: community_options(
                config.challenge_group_id.as_deref(),
                config.community_name.as_deref(),
            ),
            community_value,
            sub_community_options: sub_community_options(
                &config.communities,
                &config.visitor_group_ids,
            ),
            selected_community_id: self.selected_community_id.clone(),
            review_type_options: review_type_options(),
            review_type_value: state
                .review_opportunity_type
                .map_or(0, ReviewOpportunityType::value)
                .to_string(),
            start_date: state.start_date.clone(),
            end_date: state.end_date.clone(),
            search_text: state.search_text.clone().unwrap_or_default(),
            clear_save_disabled: self.clear_save_disabled(),
        }
    }

    fn emit(&mut self, state: FilterState) {
        tracing::debug!(empty = state.is_empty(), "filter state changed");
        self.host.set_filter_state(state.clone());
        self.filter_state = state;
    }
}

fn check_selection(selected: Option<&[String]>, options: &[String]) -> Result<()> {
    let mut validation = SelectionValidation::default();
    validation.check(selected.unwrap_or_default(), options);

    match validation.selection.into_error() {
        Some(SelectionError::Unknown(value)) => {
            tracing::warn!(value = %value, "option not offered");
            Err(PanelError::UnknownOption(value))
        }
        None => Ok(()),
    }
}
