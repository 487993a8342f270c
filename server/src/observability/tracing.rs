use std::{error::Error, io::stdout};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use geo_relay_application::infrastructure_config::{Config, LogFormat};

const SERVICE_NAME: &str = "geo-relay";

pub fn setup_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            let formatting_layer = BunyanFormattingLayer::new(SERVICE_NAME.to_string(), stdout);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let format = fmt::format()
                .with_target(true)
                .with_thread_ids(true)
                .compact();

            let subscriber = tracing_subscriber::fmt()
                .event_format(format)
                .with_env_filter(env_filter)
                .with_file(config.logging.include_location)
                .with_line_number(config.logging.include_location);

            subscriber
                .try_init()
                .map_err(|e| -> Box<dyn Error> { e })?;
        }
    }

    Ok(())
}
