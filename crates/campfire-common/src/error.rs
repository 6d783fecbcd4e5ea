//! Application-wide error type using thiserror.

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, CampfireError>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum CampfireError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Localisation error.
    #[error("Localization error: {message}")]
    Localization {
        /// What went wrong.
        message: String,
        /// Locale the failure occurred in, if known.
        locale: Option<String>,
    },

    /// Validation errors for user input or configuration values.
    #[error("Validation error: {message}")]
    Validation {
        /// What failed to validate.
        message: String,
        /// Offending field, if any.
        field: Option<String>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("Serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CampfireError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a validation error tied to a config field.
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a localisation error.
    pub fn localization(message: impl Into<String>, locale: Option<&str>) -> Self {
        Self::Localization {
            message: message.into(),
            locale: locale.map(str::to_string),
        }
    }
}
