use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Training was attempted with no historical work logs
    #[error("Training set is empty: at least one work log is required")]
    EmptyTrainingSet,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::EmptyTrainingSet => "EMPTY_TRAINING_SET",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::EmptyTrainingSet.error_code(), "EMPTY_TRAINING_SET");
        assert_eq!(
            AppError::Configuration("test".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(
            AppError::Serialization("test".to_string()).error_code(),
            "SERIALIZATION_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = AppError::EmptyTrainingSet;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_from_config_error() {
        let config_err = config::Config::builder()
            .add_source(config::File::from_str("not [valid toml", config::FileFormat::Toml))
            .build()
            .unwrap_err();
        let err: AppError = config_err.into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = json_err.into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
