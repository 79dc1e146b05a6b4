use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::core::shareit::ShareResult;
use crate::discs::factory::create_disc_repository;
use crate::utils::store::build_store;

pub async fn create_catalog_service(config: &Configuration, store: &RepositoryStore) -> ShareResult<Arc<dyn CatalogService>> {
    tracing::info!(env = %config.env, store = ?store, "creating catalog service");
    let store = build_store(store).await?;
    let book_repo = create_book_repository(store.clone());
    let disc_repo = create_disc_repository(store);
    Ok(Arc::new(CatalogServiceImpl::new(book_repo, disc_repo)))
}
