//! PiCalc-rs — arbitrary-precision π calculator.

use anyhow::Result;
use picalc_lib::{app, config};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    let default_level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    app::run(&config)
}
