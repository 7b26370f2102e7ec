use thiserror::Error;

/// Errors raised while loading bootstrap configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    pub fn invalid_value(name: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
