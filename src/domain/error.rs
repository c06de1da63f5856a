use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkerError {
    HostError(String),
    ScopeUnavailable(String),
    SerializationError(String),
    InvalidConfig(String),
}

impl fmt::Display for WorkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerError::HostError(msg) => write!(f, "Host Error: {msg}"),
            WorkerError::ScopeUnavailable(msg) => write!(f, "Scope Unavailable: {msg}"),
            WorkerError::SerializationError(msg) => write!(f, "Serialization Error: {msg}"),
            WorkerError::InvalidConfig(msg) => write!(f, "Invalid Config: {msg}"),
        }
    }
}

impl std::error::Error for WorkerError {}

impl WorkerError {
    pub fn host_error(message: impl Into<String>) -> Self {
        WorkerError::HostError(message.into())
    }

    pub fn scope_unavailable(message: impl Into<String>) -> Self {
        WorkerError::ScopeUnavailable(message.into())
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        WorkerError::SerializationError(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        WorkerError::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            WorkerError::host_error("focus rejected").to_string(),
            "Host Error: focus rejected"
        );
        assert_eq!(
            WorkerError::invalid_config("appRoot is empty").to_string(),
            "Invalid Config: appRoot is empty"
        );
    }
}
