// src/dataset/error.rs

use thiserror::Error;

/// Errors produced while loading or editing the dataset.
///
/// Variants hold strings rather than source errors so the type stays `Clone`
/// and can ride inside bevy events.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Fetch failed: {0}")]
    Fetch(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("Dataset source is not a JSON array.")]
    NotAnArray,
    #[error("Record {index} is not a JSON object.")]
    NotAnObject { index: usize },
    #[error("The 'id' field cannot be edited.")]
    IdentifierImmutable,
    #[error("Row {row} is out of range ({len} rows).")]
    RowOutOfRange { row: usize, len: usize },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for DatasetError {
    fn from(err: reqwest::Error) -> Self {
        DatasetError::Fetch(err.to_string())
    }
}
