use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::result::MediaServiceResult;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// isbn comes from the path, book from the body
#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub isbn: String,
    pub book: Option<BookDto>,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, book: Option<BookDto>) -> Self {
        Self {
            isbn: isbn.to_string(),
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub result: MediaServiceResult,
    pub book: Option<BookDto>,
}

impl UpdateBookCommandResponse {
    pub fn new(result: MediaServiceResult, book: Option<BookDto>) -> Self {
        Self {
            result,
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = match req.book {
            Some(book) => book,
            None => return Ok(UpdateBookCommandResponse::new(MediaServiceResult::ImATeapot, None)),
        };
        if book.isbn.as_deref() != Some(req.isbn.as_str()) {
            tracing::info!(isbn = %req.isbn, body_isbn = ?book.isbn, "update_book key mismatch");
            return Ok(UpdateBookCommandResponse::new(MediaServiceResult::IsbnNotEqual, None));
        }
        let (result, written) = self.catalog_service.update_book(&book).await.map_err(CommandError::from)?;
        Ok(UpdateBookCommandResponse::new(result, written))
    }
}
