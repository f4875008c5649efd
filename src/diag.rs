//! Diagnostic sink for force-unwrap warnings
//!
//! `force_unwrap` bypasses the inspection discipline, so it always emits a
//! deterrent warning. The warning channel is a trait rather than a direct
//! logging call so that tests can observe the warning deterministically and
//! embedders can silence or redirect it.

/// Receiver for diagnostic warnings emitted by the containers
///
/// The only producer is the `force_unwrap` family on [`crate::Optional`];
/// one call to [`DiagnosticSink::warn`] per forced extraction.
pub trait DiagnosticSink {
    /// Record a single warning message
    fn warn(&self, message: &str);
}

/// Default sink forwarding to [`tracing::warn!`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "optionals", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink(RefCell<Vec<String>>);

    impl DiagnosticSink for RecordingSink {
        fn warn(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_sink_receives_message() {
        let sink = RecordingSink(RefCell::new(Vec::new()));
        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.0.borrow().as_slice(), ["first", "second"]);
    }

    #[test]
    fn test_tracing_sink_is_callable() {
        // No subscriber installed; the call must still be a no-op that
        // does not panic.
        TracingSink.warn("forced unwrap");
    }
}
