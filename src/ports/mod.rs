/// Ports module - Defines the interfaces (traits) that abstract output and logging.
///
/// These traits are the contracts between the domain logger and the
/// infrastructure adapters, keeping the logging behavior decoupled from
/// where the lines actually end up.

pub mod logger;
pub mod sink;

pub use logger::LoggerPort;
pub use sink::SinkPort;
