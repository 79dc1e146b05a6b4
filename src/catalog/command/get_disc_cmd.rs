use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::discs::dto::DiscDto;

pub struct GetDiscCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetDiscCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetDiscCommandRequest {
    pub barcode: String,
}

impl GetDiscCommandRequest {
    pub fn new(barcode: String) -> Self {
        Self {
            barcode,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetDiscCommandResponse {
    pub disc: Option<DiscDto>,
}

impl GetDiscCommandResponse {
    pub fn new(disc: Option<DiscDto>) -> Self {
        Self {
            disc,
        }
    }
}

#[async_trait]
impl Command<GetDiscCommandRequest, GetDiscCommandResponse> for GetDiscCommand {
    async fn execute(&self, req: GetDiscCommandRequest) -> Result<GetDiscCommandResponse, CommandError> {
        self.catalog_service.get_disc(req.barcode.as_str())
            .await.map_err(CommandError::from).map(GetDiscCommandResponse::new)
    }
}
