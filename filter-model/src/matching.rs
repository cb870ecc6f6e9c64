use chrono::NaiveDate;

use crate::{Challenge, FilterState, parse_iso_date};

impl FilterState {
    /// True iff the challenge passes every criterion present in the record.
    ///
    /// An absent (or empty) criterion passes everything. Challenges without
    /// a date are never excluded by a date bound.
    #[must_use]
    pub fn matches(&self, challenge: &Challenge) -> bool {
        self.matches_tags(challenge)
            && self.matches_subtracks(challenge)
            && self.matches_group(challenge)
            && self.matches_dates(challenge)
            && self.matches_review_type(challenge)
            && self.matches_text(challenge)
    }

    fn matches_tags(&self, challenge: &Challenge) -> bool {
        match self.tags.as_deref() {
            None | Some([]) => true,
            Some(tags) => tags.iter().any(|tag| {
                challenge
                    .tags
                    .iter()
                    .any(|other| other.eq_ignore_ascii_case(tag))
            }),
        }
    }

    fn matches_subtracks(&self, challenge: &Challenge) -> bool {
        match self.subtracks.as_deref() {
            None | Some([]) => true,
            Some(subtracks) => subtracks.contains(&challenge.sub_track),
        }
    }

    fn matches_group(&self, challenge: &Challenge) -> bool {
        self.group_id
            .as_ref()
            .is_none_or(|group| challenge.groups.contains(group))
    }

    fn matches_dates(&self, challenge: &Challenge) -> bool {
        let starts_in_time = date_bound(self.start_date.as_deref(), "startDate")
            .is_none_or(|start| {
                challenge
                    .submission_end_date
                    .is_none_or(|end| end.date_naive() >= start)
            });

        let ends_in_time = date_bound(self.end_date.as_deref(), "endDate").is_none_or(|end| {
            challenge
                .registration_start_date
                .is_none_or(|start| start.date_naive() <= end)
        });

        starts_in_time && ends_in_time
    }

    fn matches_review_type(&self, challenge: &Challenge) -> bool {
        self.review_opportunity_type
            .is_none_or(|kind| challenge.review_opportunity_type == Some(kind))
    }

    fn matches_text(&self, challenge: &Challenge) -> bool {
        let Some(text) = self.search_text.as_deref() else {
            return true;
        };

        let needle = text.to_lowercase();
        challenge.name.to_lowercase().contains(&needle)
            || challenge
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

fn date_bound(value: Option<&str>, field: &'static str) -> Option<NaiveDate> {
    match parse_iso_date(value?) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(field, "ignoring malformed date bound: {e}");
            None
        }
    }
}

/// Challenges matching `state`, in their original order.
#[must_use]
pub fn filter_challenges<'a>(state: &FilterState, challenges: &'a [Challenge]) -> Vec<&'a Challenge> {
    let matching: Vec<&Challenge> = challenges.iter().filter(|c| state.matches(c)).collect();

    tracing::debug!(
        total = challenges.len(),
        matching = matching.len(),
        "filtered challenges"
    );

    matching
}
