//! Logger setup for binaries and tests.
//!
//! The engine itself only emits through the `log` facade; this module wires
//! `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
