//! Logging utilities.
//!
//! The engine logs through the `log` facade only; hosts decide whether to
//! install the `env_logger` backend configured here.

mod init;

pub use init::{init_logging, LoggingConfig};
