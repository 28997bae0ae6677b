/// Logger port - the message-printing contract.
///
/// Implementors write one output line per call; the shared process-wide
/// instance behind `adapters::logger()` is the usual implementor.
pub trait LoggerPort: Send + Sync {
    /// Write `message` as a single prefixed output line.
    fn log(&self, message: &str);
}
