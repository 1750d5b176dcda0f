//! Logging infrastructure.
//!
//! Structured logging using tracing and tracing-subscriber: JSON or pretty
//! formatting, env-filter overrides, and optional non-blocking file output.

pub mod logger;

pub use logger::Logger;
