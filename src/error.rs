// src/error.rs

use thiserror::Error;

/// Message shown on the list screen when the data source fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load stocks data";

/// Errors a `StockSource` can raise while producing the raw collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The backing file could not be read.
    #[error("failed to read stock data: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not the `{ "stocks": [...] }` shape.
    #[error("malformed stock data: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but breaks a universe invariant (duplicate symbol, negative price...).
    #[error("invalid stock data: {0}")]
    Invalid(String),
}

/// Raised when a navigation payload cannot be turned back into a `Stock`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("navigation payload is not a stock: {0}")]
    Json(#[from] serde_json::Error),

    #[error("navigation payload carries an invalid stock: {0}")]
    Invalid(String),
}

/// Errors from a theme key/value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("theme store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme store is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}
