use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub websocket: WebSocketConfig,
    pub static_assets: StaticAssetsConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub trust_forwarded_headers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketConfig {
    /// Outbound events queued per connection before it counts as stalled
    /// and is dropped from the relay.
    pub connection_buffer_size: usize,
    pub max_connections: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticAssetsConfig {
    pub dir: String,
    pub index: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
                trust_forwarded_headers: false,
            },
            websocket: WebSocketConfig {
                connection_buffer_size: 64,
                max_connections: None,
            },
            static_assets: StaticAssetsConfig {
                dir: "public".to_string(),
                index: "views/index.html".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "server host cannot be empty".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(AppError::ConfigError {
                message: "server port must be greater than 0".to_string(),
            });
        }

        if self.websocket.connection_buffer_size == 0 {
            return Err(AppError::ConfigError {
                message: "connection_buffer_size must be greater than 0".to_string(),
            });
        }

        if self.websocket.max_connections == Some(0) {
            return Err(AppError::ConfigError {
                message: "max_connections must be greater than 0 when set".to_string(),
            });
        }

        if self.static_assets.dir.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "static_assets dir cannot be empty".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment.env.eq_ignore_ascii_case("production")
    }
}
