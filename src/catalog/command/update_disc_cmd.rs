use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::result::MediaServiceResult;
use crate::core::command::{Command, CommandError};
use crate::discs::dto::DiscDto;

pub struct UpdateDiscCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateDiscCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// barcode comes from the path, disc from the body
#[derive(Debug)]
pub struct UpdateDiscCommandRequest {
    pub barcode: String,
    pub disc: Option<DiscDto>,
}

impl UpdateDiscCommandRequest {
    pub fn new(barcode: &str, disc: Option<DiscDto>) -> Self {
        Self {
            barcode: barcode.to_string(),
            disc,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateDiscCommandResponse {
    pub result: MediaServiceResult,
    pub disc: Option<DiscDto>,
}

impl UpdateDiscCommandResponse {
    pub fn new(result: MediaServiceResult, disc: Option<DiscDto>) -> Self {
        Self {
            result,
            disc,
        }
    }
}

#[async_trait]
impl Command<UpdateDiscCommandRequest, UpdateDiscCommandResponse> for UpdateDiscCommand {
    async fn execute(&self, req: UpdateDiscCommandRequest) -> Result<UpdateDiscCommandResponse, CommandError> {
        let disc = match req.disc {
            Some(disc) => disc,
            None => return Ok(UpdateDiscCommandResponse::new(MediaServiceResult::ImATeapot, None)),
        };
        if disc.barcode.as_deref() != Some(req.barcode.as_str()) {
            tracing::info!(barcode = %req.barcode, body_barcode = ?disc.barcode, "update_disc key mismatch");
            return Ok(UpdateDiscCommandResponse::new(MediaServiceResult::BarcodeNotEqual, None));
        }
        let (result, written) = self.catalog_service.update_disc(&disc).await.map_err(CommandError::from)?;
        Ok(UpdateDiscCommandResponse::new(result, written))
    }
}
