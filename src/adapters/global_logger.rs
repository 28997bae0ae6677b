/// Global logger instance - the one `Logger` the process ever creates.
///
/// The handle is a single-assignment lazy cell: the first `logger()` call
/// constructs the instance (printing `Logger Initialized.` to stdout) and
/// every later call returns the same reference. Concurrent first-time
/// callers block until the one construction finishes, so the instance is
/// unique even under racing first use.

use crate::adapters::native::StdoutSink;
use crate::domain::Logger;
use crate::ports::LoggerPort;
use once_cell::sync::Lazy;
use std::sync::Arc;

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(Arc::new(StdoutSink::new())));

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
