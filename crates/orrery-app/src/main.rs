//! Binary entry point: parse CLI, load config, start logging, run the app.

use clap::Parser;

use orrery_config::{CliArgs, Config, default_config_dir};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(default_config_dir);
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    orrery_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        seed = config.scene.seed,
        "starting orrery"
    );

    orrery_app::window::run_with_config(config);
}
