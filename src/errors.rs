use std::fmt;

#[derive(Debug, Clone)]
pub enum SmokeError {
    AssertionError(String),
    ApiError { status: u16, message: String },
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
}

impl SmokeError {
    /// True when the server rejected the request with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SmokeError::ApiError { status, .. } if (400..500).contains(status))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SmokeError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for SmokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokeError::AssertionError(msg) => write!(f, "Assertion failed: {}", msg),
            SmokeError::ApiError { status, message } => {
                write!(f, "API error: status {}: {}", status, message)
            }
            SmokeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            SmokeError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            SmokeError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for SmokeError {}

impl From<String> for SmokeError {
    fn from(msg: String) -> Self {
        SmokeError::AssertionError(msg)
    }
}

impl From<&str> for SmokeError {
    fn from(msg: &str) -> Self {
        SmokeError::AssertionError(msg.to_string())
    }
}

impl From<reqwest::Error> for SmokeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SmokeError::ParseError(err.to_string());
        }
        match err.status() {
            Some(status) => SmokeError::ApiError {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => SmokeError::NetworkError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SmokeError {
    fn from(err: serde_json::Error) -> Self {
        SmokeError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for SmokeError {
    fn from(err: std::io::Error) -> Self {
        SmokeError::ConfigError(err.to_string())
    }
}
