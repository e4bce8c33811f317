use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "lettermark_raster=debug"). `None` defers to `RUST_LOG`, falling back to
/// `warn` — a rendering library should stay quiet by default.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Intended usage is early in the
/// host's `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
