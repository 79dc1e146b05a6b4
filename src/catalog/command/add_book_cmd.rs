use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::result::MediaServiceResult;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// a `null` body leaves book empty
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct AddBookCommandRequest {
    pub book: Option<BookDto>,
}

impl AddBookCommandRequest {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub result: MediaServiceResult,
    pub book: Option<BookDto>,
}

impl AddBookCommandResponse {
    pub fn new(result: MediaServiceResult, book: Option<BookDto>) -> Self {
        Self {
            result,
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let result = self.catalog_service.add_book(req.book.as_ref()).await.map_err(CommandError::from)?;
        let book = if result.is_ok() { req.book } else { None };
        Ok(AddBookCommandResponse::new(result, book))
    }
}
