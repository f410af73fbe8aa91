//! Catalog Errors

use thiserror::Error;

/// Every failure the catalog page can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown category `{0}`, expected male, female or both")]
    UnknownCategory(String),

    #[error("control id `{0}` does not end with an item id")]
    InvalidControlId(String),

    #[error("page element `{0}` is missing")]
    MissingElement(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid catalog config: {0}")]
    Config(String),
}
