use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use crate::books::domain::model::BookEntity;
use crate::books::isbn::isbn_key;
use crate::books::repository::BookRepository;
use crate::core::repository::Repository;
use crate::core::shareit::{ShareError, ShareResult};
use crate::utils::store::{JsonStore, PutCondition};

#[derive(Debug)]
pub struct JsonBookRepository {
    store: Arc<JsonStore>,
    table_name: String,
}

impl JsonBookRepository {
    pub fn new(store: Arc<JsonStore>, table_name: &str) -> Self {
        Self {
            store,
            table_name: table_name.to_string(),
        }
    }
}

// books are keyed by the ISBN digits, the entity keeps the ISBN as it was submitted
#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> ShareResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.store
            .put_item(table_name, isbn_key(&entity.isbn).as_str(), val, PutCondition::NotExists)
            .await.map(|_| 1)
    }

    async fn update(&self, entity: &BookEntity) -> ShareResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let mut next = entity.clone();
        next.version = entity.version + 1;
        let val = serde_json::to_value(&next)?;
        self.store
            .put_item(table_name, isbn_key(&entity.isbn).as_str(), val, PutCondition::VersionEquals(entity.version))
            .await.map(|_| 1)
    }

    async fn get(&self, id: &str) -> ShareResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        match self.store.get_item(table_name, isbn_key(id).as_str()).await {
            Some(item) => map_to_book(item).map(Some),
            None => Ok(None),
        }
    }

    async fn contains_key(&self, id: &str) -> ShareResult<bool> {
        Ok(self.store.contains_key(self.table_name.as_str(), isbn_key(id).as_str()).await)
    }

    async fn get_all(&self) -> ShareResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        self.store.scan(table_name).await.into_iter().map(map_to_book).collect()
    }
}

impl BookRepository for JsonBookRepository {}

// a stored document that no longer parses is a store fault, not a bad request
fn map_to_book(item: Value) -> ShareResult<BookEntity> {
    serde_json::from_value(item).map_err(|err| {
        ShareError::database(format!("corrupt book document {}", err).as_str(),
                             Some("CorruptDocument".to_string()), false)
    })
}
