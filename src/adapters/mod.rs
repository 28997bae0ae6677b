/// Adapters module - concrete sinks and the process-wide logger instance.

pub mod global_logger;

pub mod native;
pub mod shared;

pub use native::StdoutSink;
pub use shared::MemorySink;

pub use global_logger::logger;
