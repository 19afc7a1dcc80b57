use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    /// The event's query-parameters container is missing, null or not an object.
    #[error("Malformed request: {field} must be an object")]
    MalformedRequest { field: String },

    #[error("Failed to encode response body: {reason}")]
    Encoding { reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Failed to load configuration from {origin}: {error}")]
    LoadFailed {
        origin: String,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, GreeterError>;

impl From<serde_json::Error> for GreeterError {
    fn from(err: serde_json::Error) -> Self {
        GreeterError::Encoding {
            reason: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for GreeterError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        GreeterError::Encoding {
            reason: err.to_string(),
        }
    }
}

impl GreeterError {
    /// HTTP status the hosting platform should see for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            GreeterError::MalformedRequest { .. } => 422,
            GreeterError::Encoding { .. } => 500,
            GreeterError::Config(_) => 500,
        }
    }

    /// Stable name used as the `error` field of error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            GreeterError::MalformedRequest { .. } => "MalformedRequest",
            GreeterError::Encoding { .. } => "Encoding",
            GreeterError::Config(_) => "Config",
        }
    }
}
