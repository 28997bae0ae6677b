use crate::ports::SinkPort;
use parking_lot::Mutex;

/// Capturing sink used by tests: lines land in an in-memory buffer that
/// assertions can read back instead of scraping process stdout.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every line written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl SinkPort for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_starts_empty() {
        let sink = MemorySink::new();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_sink_preserves_write_order() {
        let sink = MemorySink::new();
        sink.write_line("one");
        sink.write_line("two");

        assert_eq!(sink.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let sink = MemorySink::new();
        sink.write_line("one");

        let snapshot = sink.lines();
        sink.write_line("two");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(sink.lines().len(), 2);
    }
}
