use thiserror::Error;

/// Main error type for mojoconf operations
#[derive(Debug, Error)]
pub enum MojoconfError {
    #[error("Convention resolution failed for property '{property}': {details}")]
    ConventionResolution { property: String, details: String },

    #[error("No value set for required property '{property}'")]
    MissingValue { property: String },

    #[error("Source set not found: {name}")]
    SourceSetNotFound { name: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MojoconfError {
    pub fn convention_resolution<S: Into<String>>(property: S, details: S) -> Self {
        Self::ConventionResolution {
            property: property.into(),
            details: details.into(),
        }
    }

    pub fn missing_value<S: Into<String>>(property: S) -> Self {
        Self::MissingValue {
            property: property.into(),
        }
    }

    pub fn source_set_not_found<S: Into<String>>(name: S) -> Self {
        Self::SourceSetNotFound { name: name.into() }
    }

    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::SerializationError(msg.into())
    }
}

/// Result type alias for mojoconf operations
pub type Result<T> = std::result::Result<T, MojoconfError>;
