use chrono::NaiveDate;

use super::ValidationState;
use crate::parse_iso_date;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DateRangeError {
    /// Name of the bound that failed to parse.
    Malformed(&'static str),
    Inverted(NaiveDate, NaiveDate),
}

/// Guards the `start <= end` contract before a range is emitted.
#[derive(Default, Debug)]
pub struct DateRangeValidation {
    pub range: ValidationState<DateRangeError>,
}

impl DateRangeValidation {
    pub fn check(&mut self, start: Option<&str>, end: Option<&str>) {
        self.range = Self::check_range(start, end);
    }

    fn check_range(start: Option<&str>, end: Option<&str>) -> ValidationState<DateRangeError> {
        let Ok(start) = start.map(parse_iso_date).transpose() else {
            return ValidationState::Invalid(DateRangeError::Malformed("startDate"));
        };
        let Ok(end) = end.map(parse_iso_date).transpose() else {
            return ValidationState::Invalid(DateRangeError::Malformed("endDate"));
        };

        match (start, end) {
            (Some(start), Some(end)) if start > end => {
                ValidationState::Invalid(DateRangeError::Inverted(start, end))
            }
            _ => ValidationState::Valid,
        }
    }
}
