use std::sync::Arc;
use std::time::Duration;
use crate::auth::domain::{AnonymousAuthenticator, AuthError, Authenticator};
use crate::auth::http_authenticator::HttpAuthenticator;
use crate::core::domain::Configuration;

pub fn create_authenticator(config: &Configuration) -> Result<Arc<dyn Authenticator>, AuthError> {
    match &config.auth_url {
        Some(url) => {
            let timeout = Duration::from_millis(config.auth_timeout_ms);
            Ok(Arc::new(HttpAuthenticator::new(url, timeout)?))
        }
        None => {
            tracing::warn!("no auth url configured, admitting every caller");
            Ok(Arc::new(AnonymousAuthenticator::default()))
        }
    }
}
