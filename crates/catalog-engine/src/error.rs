use thiserror::Error;

/// Dataset-level and configuration failures.
///
/// Record-level problems and unparsable price bounds never become errors;
/// they are absorbed where they occur.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure or a non-success response from the source.
    #[error("catalog source unavailable: {0}")]
    SourceUnavailable(String),

    /// The payload is not JSON or not a JSON array.
    #[error("malformed catalog payload: {0}")]
    MalformedSource(String),

    #[error("failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    ConfigValidation(String),
}
