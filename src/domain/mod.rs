/// Domain module - the logger behavior itself, independent of any sink.

pub mod logger;

pub use logger::Logger;
