use std::env;

use crate::error::SigningLogError;
use crate::signinglog::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Entries returned per signing log page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://signinglog.db".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8081,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, SigningLogError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any variable source; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SigningLogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.parse().map_err(|e| {
                SigningLogError::Config(format!("SERVER_PORT {:?}: {}", port, e))
            })?,
            None => defaults.server_port,
        };

        let page_size = match lookup("SIGNINGLOG_PAGE_SIZE") {
            Some(size) => size.parse().map_err(|e| {
                SigningLogError::Config(format!("SIGNINGLOG_PAGE_SIZE {:?}: {}", size, e))
            })?,
            None => defaults.page_size,
        };

        let config = AppConfig {
            database_url,
            server_host,
            server_port,
            page_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SigningLogError> {
        if self.page_size == 0 {
            return Err(SigningLogError::Config(
                "page_size must be greater than zero".to_string(),
            ));
        }

        if self.database_url.is_empty() {
            return Err(SigningLogError::Config("database_url is empty".to_string()));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
