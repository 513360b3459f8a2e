//! Observability helpers for SimBook
//!
//! The book core emits structured `tracing` events but never installs a
//! subscriber; binaries call [`init_logging`] once at startup to pick an
//! output format.
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("simbook", LogFormat::Pretty)?;
//! tracing::info!("book ready");
//! ```

pub mod logging;

pub use logging::{init_logging, LogFormat};
