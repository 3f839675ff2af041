use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by document generation and its I/O boundary.
///
/// Layout itself never fails on content: unknown statuses, unknown currency
/// codes and missing optional fields all resolve through fallbacks. What is
/// left are the edges — reading input records, parsing configuration and
/// writing the finished bytes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse invoice record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Failed to parse company profile {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to generate PDF: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
