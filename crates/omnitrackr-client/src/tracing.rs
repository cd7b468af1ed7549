use anyhow::bail;
use omnitrackr_shared::telemetry;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, configuration::LoggingSettings};

/// Logs to a trace file unless asked for stdout, falls back to stdout if the
/// file cannot be set up
pub fn init(cli: &Cli, settings: &LoggingSettings) -> anyhow::Result<()> {
    fn init_to_file(settings: &LoggingSettings) -> anyhow::Result<()> {
        let (file, filename) = telemetry::create_trace_file(&settings.app_name)?;
        let subscriber = telemetry::get_subscriber(
            settings.app_name.clone(),
            &settings.default_filter,
            file,
        );

        // Start logging to file
        match telemetry::init_subscriber(subscriber) {
            Ok(_) => {
                eprintln!("Tracing started to file {filename:?}");
                Ok(())
            }
            Err(e) => {
                bail!("Failed to start tracing to file. Error: {e}");
            }
        }
    }

    if !cli.is_to_std_out {
        match init_to_file(settings) {
            Ok(_) => return Ok(()),
            Err(e) => {
                // Print error and fall though to logging to stdout
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.default_filter));
    match tracing_subscriber::fmt().with_env_filter(env_filter).try_init() {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}
