use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::discs::dto::DiscDto;

pub struct GetDiscsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetDiscsCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct GetDiscsCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetDiscsCommandResponse {
    pub discs: Vec<DiscDto>,
}

impl GetDiscsCommandResponse {
    pub fn new(discs: Vec<DiscDto>) -> Self {
        Self {
            discs,
        }
    }
}

#[async_trait]
impl Command<GetDiscsCommandRequest, GetDiscsCommandResponse> for GetDiscsCommand {
    async fn execute(&self, _req: GetDiscsCommandRequest) -> Result<GetDiscsCommandResponse, CommandError> {
        self.catalog_service.get_discs()
            .await.map_err(CommandError::from).map(GetDiscsCommandResponse::new)
    }
}
