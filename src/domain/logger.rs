use crate::ports::{LoggerPort, SinkPort};
use std::sync::Arc;

/// The one logger type this crate manages.
///
/// Constructing a `Logger` emits the initialization notice to its sink;
/// the process-wide instance behind `adapters::logger()` is therefore
/// observable exactly once per process. `log` writes one prefixed line
/// per call and mutates nothing.
pub struct Logger {
    sink: Arc<dyn SinkPort>,
}

impl Logger {
    /// Create a logger over `sink`, announcing the initialization on it.
    pub fn new(sink: Arc<dyn SinkPort>) -> Self {
        sink.write_line("Logger Initialized.");
        Self { sink }
    }

    /// Write `message` to the sink as `Log Message: <message>`.
    ///
    /// Accepts any string, the empty string included; no validation.
    pub fn log(&self, message: &str) {
        self.sink.write_line(&format!("Log Message: {message}"));
    }
}

impl LoggerPort for Logger {
    fn log(&self, message: &str) {
        Logger::log(self, message);
    }
}
