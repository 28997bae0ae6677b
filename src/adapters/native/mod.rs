/// Native adapters - sinks backed by the process's standard streams.

pub mod stdout_sink;

pub use stdout_sink::StdoutSink;
