use std::fs;
use std::path::Path;

use log::{debug, error};
use serde_yaml::Value;

use crate::config::CheckerConfig;
use crate::error::CheckError;

/// Resume document loader for YAML and JSON files.
///
/// Parsing is the only hard-failure point of a check: everything after a
/// successful load is reported as discrepancies, not errors.
pub struct ResumeLoader;

impl ResumeLoader {
    /// Parse a resume document from a YAML string
    pub fn from_yaml(yaml_str: &str) -> Result<Value, CheckError> {
        if yaml_str.trim().is_empty() {
            error!("resume YAML input is empty");
            return Err(CheckError::EmptyDocument);
        }

        debug!("parsing resume from YAML ({} bytes)", yaml_str.len());
        match serde_yaml::from_str(yaml_str) {
            Ok(document) => Ok(document),
            Err(e) => {
                if let Some(location) = e.location() {
                    error!(
                        "YAML syntax error at line {}, column {}",
                        location.line(),
                        location.column()
                    );
                }
                Err(CheckError::Parse(e))
            }
        }
    }

    /// Parse a resume document from a JSON string
    pub fn from_json(json_str: &str) -> Result<Value, CheckError> {
        if json_str.trim().is_empty() {
            error!("resume JSON input is empty");
            return Err(CheckError::EmptyDocument);
        }

        debug!("parsing resume from JSON ({} bytes)", json_str.len());
        match serde_json::from_str(json_str) {
            Ok(document) => Ok(document),
            Err(e) => {
                error!(
                    "JSON syntax error at line {}, column {}",
                    e.line(),
                    e.column()
                );
                Err(CheckError::JsonParse(e))
            }
        }
    }

    /// Load a resume from disk, auto-detecting format by extension
    /// (`.json` parses as JSON, everything else as YAML).
    pub fn from_file(path: &Path, config: &CheckerConfig) -> Result<Value, CheckError> {
        debug!("loading resume file {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| CheckError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.len() > config.max_document_size {
            error!(
                "resume file {} exceeds the size limit ({} > {} bytes)",
                path.display(),
                content.len(),
                config.max_document_size
            );
            return Err(CheckError::DocumentTooLarge {
                size: content.len(),
                limit: config.max_document_size,
            });
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }
}
