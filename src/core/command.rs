use async_trait::async_trait;
use crate::core::shareit::ShareError;

#[derive(Debug)]
pub enum CommandError {
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
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<ShareError> for CommandError {
    fn from(other: ShareError) -> Self {
        match other {
            ShareError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            ShareError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            ShareError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            ShareError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            ShareError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            ShareError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::shareit::ShareError;

    #[tokio::test]
    async fn test_should_convert_share_error() {
        assert!(matches!(CommandError::from(ShareError::database("test", None, false)), CommandError::Database { .. }));
        assert!(matches!(CommandError::from(ShareError::duplicate_key("test")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(ShareError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(ShareError::unavailable("test", None, true)), CommandError::Runtime { retryable: true, .. }));
        assert!(matches!(CommandError::from(ShareError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(ShareError::runtime("test", None)), CommandError::Runtime { retryable: false, .. }));
    }
}
