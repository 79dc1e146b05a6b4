use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::auth::domain::{AuthError, Authenticator};

// HttpAuthenticator asks the auth service at `{base_url}{token}`; a 2xx answer carries
// the identity on its first line.
#[derive(Debug)]
pub struct HttpAuthenticator {
    client: Client,
    base_url: String,
}

impl HttpAuthenticator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AuthError::unavailable(format!("failed to build auth client {}", err).as_str(), false))?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<String, AuthError> {
        if !is_token_shaped(token) {
            return Err(AuthError::invalid_token("token is empty or malformed"));
        }
        let url = format!("{}{}", self.base_url, token);
        let res = self.client.get(url.as_str()).send().await.map_err(|err| {
            tracing::warn!(timeout = err.is_timeout(), "auth service unreachable: {}", err);
            AuthError::unavailable(format!("auth request failed {}", err).as_str(), true)
        })?;

        let status = res.status();
        if status.is_success() {
            let body = res.text().await
                .map_err(|err| AuthError::unavailable(format!("auth body unreadable {}", err).as_str(), true))?;
            let identity = body.lines().next().unwrap_or("").trim();
            if identity.is_empty() {
                return Err(AuthError::invalid_token("auth service returned no identity"));
            }
            Ok(identity.to_string())
        } else if status.is_client_error() {
            Err(AuthError::invalid_token(format!("auth service rejected token {}", status).as_str()))
        } else {
            Err(AuthError::unavailable(format!("auth service answered {}", status).as_str(), status.is_server_error()))
        }
    }
}

// tokens go into the url path unescaped
fn is_token_shaped(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}
