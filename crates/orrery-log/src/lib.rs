//! Structured logging for the Orrery application.
//!
//! Installs a `tracing` subscriber with console output (uptime timer, module
//! paths) and, in debug builds, an additional JSON file layer for post-mortem
//! analysis. The filter respects `RUST_LOG` and falls back to the config's
//! `log_level` setting.

use std::path::Path;

use orrery_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// * `log_dir` - Optional directory for JSON log files (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration providing a log level override
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => {
            format!("{},wgpu=warn,naga=warn", config.debug.log_level)
        }
        _ => "info,wgpu=warn,naga=warn".to_string(),
    };

    // RUST_LOG wins over the config setting when present.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("orrery.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The default filter: `info` everywhere, `warn` for the noisy GPU crates.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info,wgpu=warn,naga=warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_gpu_crates() {
        let filter_str = format!("{}", default_env_filter());
        assert!(filter_str.contains("wgpu=warn"));
        assert!(filter_str.contains("naga=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_config_log_level_feeds_the_filter() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        let filter = EnvFilter::new(format!("{},wgpu=warn,naga=warn", config.debug.log_level));
        assert!(format!("{filter}").contains("debug"));
    }

    #[test]
    fn test_filter_strings_parse() {
        let valid = ["info", "debug,orrery_core=trace", "warn,wgpu=error", "error"];
        for s in valid {
            assert!(EnvFilter::try_from(s).is_ok(), "failed to parse {s:?}");
        }
    }

    #[test]
    fn test_log_file_path_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orrery.log");
        assert_eq!(path.file_name().unwrap(), "orrery.log");
    }
}
