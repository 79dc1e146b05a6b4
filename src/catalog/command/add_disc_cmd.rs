use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::result::MediaServiceResult;
use crate::core::command::{Command, CommandError};
use crate::discs::dto::DiscDto;

pub struct AddDiscCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddDiscCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// a `null` body leaves disc empty
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct AddDiscCommandRequest {
    pub disc: Option<DiscDto>,
}

impl AddDiscCommandRequest {
    pub fn new(disc: Option<DiscDto>) -> Self {
        Self {
            disc,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddDiscCommandResponse {
    pub result: MediaServiceResult,
    pub disc: Option<DiscDto>,
}

impl AddDiscCommandResponse {
    pub fn new(result: MediaServiceResult, disc: Option<DiscDto>) -> Self {
        Self {
            result,
            disc,
        }
    }
}

#[async_trait]
impl Command<AddDiscCommandRequest, AddDiscCommandResponse> for AddDiscCommand {
    async fn execute(&self, req: AddDiscCommandRequest) -> Result<AddDiscCommandResponse, CommandError> {
        let result = self.catalog_service.add_disc(req.disc.as_ref()).await.map_err(CommandError::from)?;
        let disc = if result.is_ok() { req.disc } else { None };
        Ok(AddDiscCommandResponse::new(result, disc))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_disc_cmd::{AddDiscCommand, AddDiscCommandRequest};
    use crate::catalog::factory;
    use crate::catalog::result::MediaServiceResult;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::discs::dto::DiscDto;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<Arc<AddDiscCommand>> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::Memory)
                    .await.expect("should create catalog service");
                Arc::new(AddDiscCommand::new(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_add_disc() {
        let cmd = SUT_CMD.get().await.clone();

        let disc = DiscDto::new("test disc", "director", "4006680054386");
        let res = cmd.execute(AddDiscCommandRequest::new(Some(disc.clone())))
            .await.expect("should add disc");
        assert_eq!(MediaServiceResult::Ok, res.result);
        assert_eq!(Some(disc), res.disc);
    }

    #[tokio::test]
    async fn test_should_run_add_disc_without_barcode() {
        let cmd = SUT_CMD.get().await.clone();

        let req: AddDiscCommandRequest = serde_json::from_str(r#"{"title": "t", "director": "d"}"#)
            .expect("should parse request");
        let res = cmd.execute(req).await.expect("should answer");
        assert_eq!(MediaServiceResult::BarcodeNotFound, res.result);
        assert_eq!(None, res.disc);
    }
}
