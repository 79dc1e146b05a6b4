use axum::extract::State;
use axum::http::header::{AUTHORIZATION, RETRY_AFTER};
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use crate::auth::domain::AuthError;
use crate::catalog::result::MediaServiceResult;
use crate::core::controller::AppState;

const BEARER: &str = "Bearer ";
const RETRY_AFTER_SECS: &str = "1";

// admits a request only when the authenticator resolves its bearer token
pub async fn require_token<B>(State(state): State<AppState>, req: Request<B>, next: Next<B>) -> Response {
    let token = req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER))
        .map(|v| v.trim().to_string())
        .unwrap_or_default();

    match state.authenticator.authenticate(token.as_str()).await {
        Ok(identity) => {
            tracing::info!(%identity, method = %req.method(), uri = %req.uri(), "request admitted");
            next.run(req).await
        }
        Err(AuthError::InvalidToken { message }) => {
            tracing::info!(uri = %req.uri(), "request rejected: {}", message);
            MediaServiceResult::Unauthorized.into_response()
        }
        Err(err @ AuthError::Unavailable { .. }) => {
            tracing::warn!(uri = %req.uri(), retryable = err.retryable(), "request not admitted: {}", err);
            let mut res = MediaServiceResult::AuthUnavailable.into_response();
            if err.retryable() {
                res.headers_mut().insert(RETRY_AFTER, HeaderValue::from_static(RETRY_AFTER_SECS));
            }
            res
        }
    }
}
