//! # resume-format
//!
//! Resume format validation library. Checks that a parsed resume document
//! (nested mappings, sequences and scalars) conforms to the expected
//! schema, and reports human-readable, actionable diagnostics: which keys
//! are missing, which values are mistyped, which repeated entries are
//! malformed, each paired with a corrective example snippet.
//!
//! ## Features
//!
//! - **Single-pass validation**: every discrepancy in the document is
//!   collected in one traversal, never stop-at-first-error
//! - **Consolidated diagnostics**: discrepancies are grouped per section
//!   and rendered as one composite message with fenced YAML examples
//! - **Injected delivery**: diagnostics go through a [`DiagnosticsSink`],
//!   defaulting to the `log` crate
//! - **YAML and JSON input**: file loading auto-detects the format
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume_format::ResumeFormatChecker;
//!
//! fn main() -> resume_format::Result<()> {
//!     let checker = ResumeFormatChecker::new();
//!
//!     if checker.check_file("resume.yaml")? {
//!         println!("Resume format is correct");
//!     } else {
//!         println!("Resume has formatting errors, see the log");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod schema;
pub mod validator;

// High-level API exports (simple one-line usage)
pub use checker::ResumeFormatChecker;

// Schema model exports
pub use schema::{value_type_name, ResumeSchema, ScalarKind, SchemaNode};

// Validation exports
pub use validator::{ActualType, Discrepancy, PathSegment, StructuralValidator};

// Reporting exports
pub use report::{DiagnosticReporter, DiagnosticsSink, LogSink, SectionReport};

// Loading and configuration exports
pub use config::CheckerConfig;
pub use loader::ResumeLoader;

// Error exports
pub use error::CheckError;

// Result type alias
pub type Result<T> = std::result::Result<T, CheckError>;

// Re-export the document value model for convenience
pub use serde_yaml::Value as YamlValue;

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        ActualType, CheckError, CheckerConfig, DiagnosticReporter, DiagnosticsSink, Discrepancy,
        LogSink, PathSegment, Result, ResumeFormatChecker, ResumeLoader, ResumeSchema, ScalarKind,
        SchemaNode, StructuralValidator, YamlValue,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "resume-format");
    }
}
