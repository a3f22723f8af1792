/// Delivery capability for rendered diagnostics.
///
/// The reporter itself stays pure; whoever constructs the checker decides
/// where messages go. Production code uses [`LogSink`]; tests inject a
/// recording implementation.
pub trait DiagnosticsSink {
    /// Deliver one composite diagnostic message at error severity
    fn report_error(&self, message: &str);
}

/// Production sink: forwards to the `log` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn report_error(&self, message: &str) {
        log::error!("{}", message);
    }
}
