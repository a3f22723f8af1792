use thiserror::Error;

/// Hard failures raised while loading a resume document.
///
/// Structural problems inside a successfully parsed document are never
/// errors; they are collected as [`Discrepancy`](crate::Discrepancy)
/// records so a single pass covers the whole document.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("failed to read resume file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("resume document is empty")]
    EmptyDocument,

    #[error("YAML parsing error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("resume document is too large ({size} > {limit} bytes)")]
    DocumentTooLarge { size: usize, limit: usize },
}
