use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: bind_address
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?,
        })
    }
}
