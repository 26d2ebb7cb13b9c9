//! Configuration module
//!
//! Settings are read from the process environment (after loading `.env`
//! through `dotenvy`). The container name is fixed in
//! [`crate::constants::CONTAINER_NAME`] and is not part of the configuration.

use std::env;

use crate::constants::DEFAULT_SERVER_PORT;
use crate::storage_types::StorageBackend;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub storage_backend: StorageBackend,
    pub azure_storage_connection_string: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match lookup("PORT").filter(|s| !s.trim().is_empty()) {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_SERVER_PORT,
        };

        let storage_backend = lookup("STORAGE_BACKEND")
            .map(|s| s.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::Azure);

        Ok(Config {
            server_port,
            environment,
            storage_backend,
            azure_storage_connection_string: lookup("AZURE_STORAGE_CONNECTION_STRING")
                .filter(|s| !s.trim().is_empty()),
            local_storage_path: lookup("LOCAL_STORAGE_PATH"),
            local_storage_base_url: lookup("LOCAL_STORAGE_BASE_URL"),
        })
    }

    /// Fail fast when the selected backend is missing its settings.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::Azure => {
                if self.azure_storage_connection_string.is_none() {
                    return Err(anyhow::anyhow!(
                        "AZURE_STORAGE_CONNECTION_STRING must be set when STORAGE_BACKEND=azure"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "STORAGE_BACKEND=local requires LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL"
                    ));
                }
            }
            StorageBackend::Memory => {}
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn azure_storage_connection_string(&self) -> Option<&str> {
        self.azure_storage_connection_string.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.local_storage_base_url.as_deref()
    }
}
