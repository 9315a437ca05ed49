use std::{cell::RefCell, rc::Rc};

use tracing::Level;

/// Receiver for diagnostic lines emitted by the bookkeeping engine.
///
/// The engine renders its own state into a line and hands it off here,
/// along with a severity. Nothing the engine computes depends on what a
/// sink does with the line.
pub trait DiagnosticSink {
    fn record(&self, severity: Level, line: &str);
}

/// Forwards each line to the global tracing subscriber.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, severity: Level, line: &str) {
        match severity {
            Level::ERROR => tracing::error!("{line}"),
            Level::WARN => tracing::warn!("{line}"),
            Level::INFO => tracing::info!("{line}"),
            Level::DEBUG => tracing::debug!("{line}"),
            // Level's inner repr is private, so the compiler cannot see
            // that TRACE is the only remaining value.
            _ => tracing::trace!("{line}"),
        }
    }
}

/// Discards everything.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _severity: Level, _line: &str) {}
}

/// Buffers lines in memory, so tests (or an embedding UI) can read back
/// what the engine reported.
pub struct BufferSink {
    lines: RefCell<Vec<(Level, String)>>,
}

impl BufferSink {
    pub fn new() -> BufferSink {
        BufferSink {
            lines: RefCell::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }
}

impl DiagnosticSink for BufferSink {
    fn record(&self, severity: Level, line: &str) {
        self.lines.borrow_mut().push((severity, line.to_string()));
    }
}

// For convenience, so we can pass around a shared sink.
#[derive(Clone)]
pub struct DiagHandle {
    s: Rc<dyn DiagnosticSink>,
}

impl DiagHandle {
    pub fn tracing_handle() -> DiagHandle {
        DiagHandle {
            s: Rc::new(TracingSink),
        }
    }

    pub fn null_handle() -> DiagHandle {
        DiagHandle { s: Rc::new(NullSink) }
    }

    pub fn buffer_handle() -> (DiagHandle, Rc<BufferSink>) {
        let sink = Rc::new(BufferSink::new());
        let h = DiagHandle { s: sink.clone() };
        (h, sink)
    }

    pub fn record(&self, severity: Level, line: &str) {
        self.s.record(severity, line);
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use crate::testlib::assert_vec_eq;

    use super::DiagHandle;

    #[test]
    fn test_buffer_handle() {
        let (handle, sink) = DiagHandle::buffer_handle();
        handle.record(Level::DEBUG, "first line");
        handle.record(Level::WARN, "second line");

        assert_vec_eq(
            sink.lines(),
            vec![
                (Level::DEBUG, "first line".to_string()),
                (Level::WARN, "second line".to_string()),
            ],
        );
    }

    #[test]
    fn test_null_handle() {
        // Only verifies that recording is a no-op that doesn't panic.
        let handle = DiagHandle::null_handle();
        handle.record(Level::DEBUG, "dropped");
    }

    #[test]
    fn test_tracing_handle() {
        crate::tracing::setup_tracing();
        let handle = DiagHandle::tracing_handle();
        handle.record(Level::TRACE, "forwarded to subscriber");
    }
}
