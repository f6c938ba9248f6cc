//! Error types for the scrape and fixture pipelines.
//!
//! Malformed markup and unparseable `index: title` fields are never errors;
//! they resolve to documented defaults inside the extractor and reshaper.
//! Everything here is fatal to the operation that raised it. The crawl loop
//! is the one place that catches `Transport`/`Http` per page and continues.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} fetching {url}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image {field} is not a valid integer: {value:?}")]
    InvalidDimension { field: &'static str, value: String },
    #[error("fusion number is not a valid integer: {value:?}")]
    InvalidNumber { value: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
