use thiserror::Error;

/// Why a monetary value could not be read as a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("amount is missing")]
    Missing,
    #[error("amount is empty")]
    Empty,
    #[error("amount is not numeric: {0:?}")]
    NotNumeric(String),
    #[error("amount is not a finite number")]
    NotFinite,
}

/// Failures while reading inline JSON data from the host page.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no browser window or document available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} has no text content")]
    EmptyElement(String),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
