/// Shared adapters - sinks independent of any platform stream.

pub mod memory_sink;

pub use memory_sink::MemorySink;
