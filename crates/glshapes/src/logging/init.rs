use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "glshapes=debug"). When unset, `RUST_LOG` is read, and failing that
/// `default_level` applies.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger, once.
///
/// Returns `true` only for the call that actually installed it. Later calls,
/// or a logger installed elsewhere first, leave the existing one in place.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter.as_deref() {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logging initialized");
        }
    });
    installed
}
