//! Error types for teacher-insights

use thiserror::Error;

/// Errors raised while loading configuration or an external activity source.
///
/// None of these cross the query boundary: source errors are absorbed by
/// [`crate::ingest::resolve_source`], which falls back to the seed dataset.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// External source is structurally unusable
    #[error("unusable activity source: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, Error>;
