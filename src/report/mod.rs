pub mod diagnostic_reporter;
pub mod diagnostics_sink;

pub use diagnostic_reporter::{DiagnosticReporter, SectionReport};
pub use diagnostics_sink::{DiagnosticsSink, LogSink};
