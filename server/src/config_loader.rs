use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use geo_relay_application::error::{AppError, AppResult};
use geo_relay_application::infrastructure_config::Config;
use std::path::Path;

const ENV_PREFIX: &str = "GEORELAY_";
const PORT_ENV: &str = "PORT";

pub fn load_config() -> AppResult<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    extract_config(with_env_overrides(figment))
}

fn with_env_overrides(figment: Figment) -> Figment {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Env::raw().only(&[PORT_ENV]).map(|_| "server.port".into()))
}

fn extract_config(figment: Figment) -> AppResult<Config> {
    let config: Config = figment.extract().map_err(|e| AppError::ConfigError {
        message: format!("Failed to load configuration: {e}"),
    })?;

    config.validate()?;
    Ok(config)
}
