//! Process-wide singleton logger.
//!
//! One `Logger` instance is lazily created on the first call to
//! [`logger()`] and shared for the lifetime of the process. Creation
//! prints an initialization notice; [`Logger::log`] prints one prefixed
//! line per call.

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod ports;

// Re-exports for callers and testing
pub use adapters::logger;
pub use adapters::shared::MemorySink;
pub use domain::Logger;
pub use ports::{LoggerPort, SinkPort};
