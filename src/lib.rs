//! Implement the SPA log and system plugin interfaces from Rust.
//!
//! The log interface is variadic, which stable Rust cannot define. A small C
//! shim owns the variadic entry points, renders each message into a stack
//! buffer and hands the finished text to [`logging::sink::LogSink`]. The
//! variadic `ioctl` callback gets the same treatment in [`system`].

pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod system;

pub use logging::client::LogClient;
pub use logging::interface::LogInterface;
pub use logging::level::LogLevel;
pub use logging::record::{LogRecord, LogTopic};
pub use logging::sink::LogSink;
