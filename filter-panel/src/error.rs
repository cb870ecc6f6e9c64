use chrono::NaiveDate;
use filter_model::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Inverted Date Range: {start} is after {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown Option: {0}")]
    UnknownOption(String),

    #[error("Filter Error: {0}")]
    Filter(#[from] FilterError),

    #[error("Config Error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PanelError>;
