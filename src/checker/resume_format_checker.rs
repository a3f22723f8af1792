use std::path::Path;

use serde_yaml::Value;

use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::loader::ResumeLoader;
use crate::report::{DiagnosticReporter, DiagnosticsSink, LogSink};
use crate::schema::ResumeSchema;
use crate::validator::StructuralValidator;

/// Checks resume documents against the standard schema and delivers
/// consolidated diagnostics through the configured sink.
pub struct ResumeFormatChecker {
    schema: ResumeSchema,
    config: CheckerConfig,
    sink: Box<dyn DiagnosticsSink>,
}

impl ResumeFormatChecker {
    /// Create a checker with the standard schema, default configuration
    /// and log-backed diagnostics
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogSink))
    }

    /// Create a checker that delivers diagnostics through `sink`
    pub fn with_sink(sink: Box<dyn DiagnosticsSink>) -> Self {
        Self {
            schema: ResumeSchema::standard(),
            config: CheckerConfig::default(),
            sink,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    /// Check a resume file. `Ok(true)` means the format is correct;
    /// `Ok(false)` means discrepancies were found and reported through the
    /// sink. Only an unreadable or unparseable file is an `Err`.
    pub fn check_file(&self, path: impl AsRef<Path>) -> Result<bool, CheckError> {
        let document = ResumeLoader::from_file(path.as_ref(), &self.config)?;
        Ok(self.check_value(&document))
    }

    /// Check an already-parsed resume document
    pub fn check_value(&self, document: &Value) -> bool {
        let discrepancies = StructuralValidator::validate(document, self.schema.root());
        DiagnosticReporter::report(&discrepancies, &self.schema, self.sink.as_ref()).is_none()
    }

    /// The schema this checker validates against
    pub fn schema(&self) -> &ResumeSchema {
        &self.schema
    }
}

impl Default for ResumeFormatChecker {
    fn default() -> Self {
        Self::new()
    }
}
