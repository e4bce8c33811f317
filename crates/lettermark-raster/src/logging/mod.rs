//! Logging utilities.
//!
//! Centralizes logger initialization for hosts embedding the raster backend.
//! Library code only emits through the `log` facade; nothing here is required
//! if the host installs its own logger.

mod init;

pub use init::{LoggingConfig, init_logging};
