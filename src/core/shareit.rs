use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ShareError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Retry-able error raised when a conditional write lost against a concurrent writer,
    // i.e. the stored version moved on since the entity was read.
    // The caller can re-read the entity and retry with or without a backoff.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl ShareError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> ShareError {
        ShareError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> ShareError {
        ShareError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> ShareError {
        ShareError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> ShareError {
        ShareError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn serialization(message: &str) -> ShareError {
        ShareError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> ShareError {
        ShareError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            ShareError::Database { retryable, .. } => { *retryable }
            ShareError::DuplicateKey { .. } => { false }
            ShareError::NotFound { .. } => { false }
            ShareError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            ShareError::Serialization { .. } => { false }
            ShareError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for ShareError {
    fn from(err: std::io::Error) -> Self {
        ShareError::database(
            format!("store io {:?}", err).as_str(), Some(format!("{:?}", err.kind())), false)
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(err: serde_json::Error) -> Self {
        ShareError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for ShareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            ShareError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            ShareError::NotFound { message } => {
                write!(f, "{}", message)
            }
            ShareError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            ShareError::Serialization { message } => {
                write!(f, "{}", message)
            }
            ShareError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for ShareError {}

/// A specialized Result type for the media store and catalog service.
pub type ShareResult<T> = Result<T, ShareError>;
