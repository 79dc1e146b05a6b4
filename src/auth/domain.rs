use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;

pub const ANONYMOUS: &str = "anonymous";

// A rejected token and an unreachable auth service are kept apart so callers can
// retry the latter without touching the former.
#[derive(Debug, PartialEq)]
pub enum AuthError {
    InvalidToken {
        message: String,
    },
    Unavailable {
        message: String,
        retryable: bool,
    },
}

impl AuthError {
    pub fn invalid_token(message: &str) -> AuthError {
        AuthError::InvalidToken { message: message.to_string() }
    }

    pub fn unavailable(message: &str, retryable: bool) -> AuthError {
        AuthError::Unavailable { message: message.to_string(), retryable }
    }

    pub fn retryable(&self) -> bool {
        match self {
            AuthError::InvalidToken { .. } => { false }
            AuthError::Unavailable { retryable, .. } => { *retryable }
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidToken { message } => {
                write!(f, "invalid token {}", message)
            }
            AuthError::Unavailable { message, retryable } => {
                write!(f, "auth unavailable {} {}", message, retryable)
            }
        }
    }
}

impl std::error::Error for AuthError {}

// Authenticator resolves a caller token into the caller identity
#[async_trait]
pub trait Authenticator: Sync + Send {
    async fn authenticate(&self, token: &str) -> Result<String, AuthError>;
}

// admits every caller, used when no auth service is configured
#[derive(Debug, Default)]
pub struct AnonymousAuthenticator {}

#[async_trait]
impl Authenticator for AnonymousAuthenticator {
    async fn authenticate(&self, _token: &str) -> Result<String, AuthError> {
        Ok(ANONYMOUS.to_string())
    }
}
