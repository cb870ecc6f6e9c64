mod date_range;
mod selection;

pub use date_range::{DateRangeError, DateRangeValidation};
pub use selection::{SelectionError, SelectionValidation};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ValidationState<T> {
    Unused,
    Valid,
    Invalid(T),
}

impl<T> Default for ValidationState<T> {
    fn default() -> Self {
        Self::Unused
    }
}

impl<T> ValidationState<T> {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(&self, Self::Valid)
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(&self, Self::Invalid(_))
    }

    #[must_use]
    pub const fn error(&self) -> Option<&T> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }

    /// Consumes a finished check, yielding the failure if there was one.
    #[must_use]
    pub fn into_error(self) -> Option<T> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Unused | Self::Valid => None,
        }
    }
}
