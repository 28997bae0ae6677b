use crate::ports::SinkPort;

/// Production sink: one line to standard output per call.
#[derive(Debug, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SinkPort for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = StdoutSink::new();
        sink.write_line("test");
    }

    #[test]
    fn test_sink_accepts_empty_line() {
        let sink = StdoutSink::default();
        sink.write_line("");
    }
}
