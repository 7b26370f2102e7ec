use std::sync::Arc;

use crate::config::errors::ConfigError;
use crate::config::EnvironmentProvider;

/// Bootstrap settings for infrastructure configuration
///
/// Loaded once at startup; everything the process needs before it can
/// open the database and bind the listener.
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider
    ///
    /// Missing variables fall back to defaults; a present but unparseable
    /// PORT is an error rather than a silent fallback.
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ConfigError> {
        let database_url = env_provider
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://notes.db?mode=rwc".to_string());

        let server_host = env_provider
            .get_var("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port_value = env_provider
            .get_var("PORT")
            .unwrap_or_else(|| "3000".to_string());

        let server_port = port_value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ConfigError::invalid_value("PORT", &port_value))?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }
}
