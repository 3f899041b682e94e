use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    Network(String),
    Api(String),
    Validation(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
}

impl ConsoleError {
    pub fn code(&self) -> &'static str {
        match self {
            ConsoleError::Network(_) => "E001",
            ConsoleError::Api(_) => "E002",
            ConsoleError::Validation(_) => "E003",
            ConsoleError::Config(_) => "E004",
            ConsoleError::FileOperation(_) => "E005",
            ConsoleError::Serialization(_) => "E006",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ConsoleError::Network(_) => "Network Error",
            ConsoleError::Api(_) => "API Error",
            ConsoleError::Validation(_) => "Validation Error",
            ConsoleError::Config(_) => "Configuration Error",
            ConsoleError::FileOperation(_) => "File Operation Error",
            ConsoleError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ConsoleError::Network(msg) => msg,
            ConsoleError::Api(msg) => msg,
            ConsoleError::Validation(msg) => msg,
            ConsoleError::Config(msg) => msg,
            ConsoleError::FileOperation(msg) => msg,
            ConsoleError::Serialization(msg) => msg,
        }
    }

    pub fn network<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Network(msg.into())
    }

    pub fn api<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Api(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Validation(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Config(msg.into())
    }

    pub fn file_operation<S: Into<String>>(msg: S) -> Self {
        ConsoleError::FileOperation(msg.into())
    }

    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Serialization(msg.into())
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // API errors carry the backend's message verbatim; everything else is
        // prefixed with the error type so the source is obvious in logs.
        match self {
            ConsoleError::Api(msg) => write!(f, "{}", msg),
            other => write!(f, "{}: {}", other.error_type(), other.message()),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        ConsoleError::Network(err.to_string())
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ConsoleError::network("x").code(), "E001");
        assert_eq!(ConsoleError::api("x").code(), "E002");
        assert_eq!(ConsoleError::validation("x").code(), "E003");
        assert_eq!(ConsoleError::config("x").code(), "E004");
        assert_eq!(ConsoleError::file_operation("x").code(), "E005");
        assert_eq!(ConsoleError::serialization("x").code(), "E006");
    }

    #[test]
    fn api_error_displays_backend_message_verbatim() {
        let err = ConsoleError::api("Short code not found");
        assert_eq!(err.to_string(), "Short code not found");
    }

    #[test]
    fn other_errors_carry_type_prefix() {
        let err = ConsoleError::validation("URL cannot be empty");
        assert_eq!(err.to_string(), "Validation Error: URL cannot be empty");
    }
}
