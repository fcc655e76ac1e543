//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ConfigError::NotFound("feedrelay.toml".to_string());
        assert!(err.to_string().contains("feedrelay.toml"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_missing_required_lists_all() {
        let err = ConfigError::MissingRequired(vec![
            "DISCORD_WEBHOOK_URL".to_string(),
            "ANTHROPIC_API_KEY".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: DISCORD_WEBHOOK_URL, ANTHROPIC_API_KEY"
        );
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::InvalidValue {
            field: "CHECK_INTERVAL".to_string(),
            message: "not a number".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("CHECK_INTERVAL"));
        assert!(display.contains("not a number"));
    }

    #[test]
    fn test_env_var_not_set_error() {
        let err = ConfigError::EnvVarNotSet("API_KEY".to_string());
        assert!(err.to_string().contains("API_KEY"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }
}
