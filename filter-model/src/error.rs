use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown Review Opportunity Type: {0}")]
    UnknownReviewOpportunityType(u8),

    #[error("Invalid Date `{value}`: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Serde Json Error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
