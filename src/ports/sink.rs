/// Sink port - line-oriented output stream.
///
/// Abstracts the destination of log lines:
/// - production: standard output
/// - tests: an in-memory buffer the assertions can read back
pub trait SinkPort: Send + Sync {
    /// Write one line, terminator included by the sink.
    fn write_line(&self, line: &str);
}
