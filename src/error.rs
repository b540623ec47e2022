use thiserror::Error;

/// Errors raised while reading the embedded ranking dataset
///
/// These never reach the page: `DatasetStore::load` logs them and falls back
/// to an empty dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("No dataset payload found in page")]
    MissingPayload,

    #[error("Malformed dataset payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
