use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use crate::auth::domain::Authenticator;
use crate::auth::factory::create_authenticator;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::catalog::result::MediaServiceResult;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::core::shareit::{ShareError, ShareResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub async fn new(config: Configuration) -> ShareResult<AppState> {
        let store = RepositoryStore::from_data_file(config.data_file.as_deref());
        let catalog = create_catalog_service(&config, &store).await?;
        let authenticator = create_authenticator(&config)
            .map_err(|err| ShareError::runtime(format!("{}", err).as_str(), None))?;
        Ok(AppState::with(config, catalog, authenticator))
    }

    pub fn with(config: Configuration, catalog: Arc<dyn CatalogService>,
                authenticator: Arc<dyn Authenticator>) -> AppState {
        AppState {
            config,
            catalog,
            authenticator,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        tracing::error!("command failed {:?}", err);
        match err {
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { retryable: true, .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            // request bodies are parsed by the handlers, anything left is a stored document
            CommandError::Serialization { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

impl IntoResponse for MediaServiceResult {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_error_body())).into_response()
    }
}

// answers the medium itself on success, the {code, detail} body otherwise
pub fn medium_response<T: Serialize>(result: MediaServiceResult, medium: Option<T>) -> Response {
    match (result, medium) {
        (MediaServiceResult::Ok, Some(medium)) => (StatusCode::OK, Json(medium)).into_response(),
        (result, _) => result.into_response(),
    }
}
