//! Diagnostics sink for non-fatal planner warnings.
//!
//! The planner never writes to a global logger directly; callers inject a
//! sink, so the core stays free of hidden I/O and tests can assert on the
//! warnings a run produced. The default sink forwards to `tracing`.

/// Receiver for warning-level planner diagnostics, such as a skipped
/// catalogue entry or an unmatched packed cut.
pub trait Diagnostics {
    fn warn(&mut self, message: &str);
}

/// Default sink: forwards warnings to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&mut self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Sink that records warnings in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    /// Collected warning messages, in emission order.
    pub warnings: Vec<String>,
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
