use thiserror::Error;

#[derive(Error, Debug)]
pub enum SafeTextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

impl SafeTextError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a configuration/usage error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SafeTextError>;

impl From<anyhow::Error> for SafeTextError {
    fn from(err: anyhow::Error) -> Self {
        SafeTextError::Other(err.to_string())
    }
}

impl From<serde_json::Error> for SafeTextError {
    fn from(err: serde_json::Error) -> Self {
        SafeTextError::parse(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SafeTextError::config("unknown grammar 'html'");
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown grammar 'html'"
        );
    }
}
