use thiserror::Error;

/// Failure to obtain the schedule markup. Transport details are flattened
/// into the message so callers never depend on the HTTP client's types.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// No schedule containers could be located. Logged and degraded to an empty
/// schedule rather than returned to callers.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no schedule rows or day headers found in markup")]
    NoContainers,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read depth chart from {path}: {message}")]
    Read { path: String, message: String },
    #[error("depth chart record {record} could not be tokenized: {message}")]
    Tokenize { record: u64, message: String },
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("recommendation collection is malformed: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Malformed(e.to_string())
    }
}
