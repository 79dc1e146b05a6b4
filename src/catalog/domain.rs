pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::result::MediaServiceResult;
use crate::core::shareit::ShareResult;
use crate::discs::dto::DiscDto;

// CatalogService reports every rule violation as a MediaServiceResult, the error
// channel only carries store faults.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: Option<&BookDto>) -> ShareResult<MediaServiceResult>;
    async fn add_disc(&self, disc: Option<&DiscDto>) -> ShareResult<MediaServiceResult>;
    async fn get_book(&self, isbn: &str) -> ShareResult<Option<BookDto>>;
    async fn get_books(&self) -> ShareResult<Vec<BookDto>>;
    async fn get_disc(&self, barcode: &str) -> ShareResult<Option<DiscDto>>;
    async fn get_discs(&self) -> ShareResult<Vec<DiscDto>>;
    // an accepted update answers the medium exactly as it was written
    async fn update_book(&self, book: &BookDto) -> ShareResult<(MediaServiceResult, Option<BookDto>)>;
    async fn update_disc(&self, disc: &DiscDto) -> ShareResult<(MediaServiceResult, Option<DiscDto>)>;
}
