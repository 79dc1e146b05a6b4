use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use crate::core::repository::Repository;
use crate::core::shareit::{ShareError, ShareResult};
use crate::discs::domain::model::DiscEntity;
use crate::discs::repository::DiscRepository;
use crate::utils::store::{JsonStore, PutCondition};

#[derive(Debug)]
pub struct JsonDiscRepository {
    store: Arc<JsonStore>,
    table_name: String,
}

impl JsonDiscRepository {
    pub fn new(store: Arc<JsonStore>, table_name: &str) -> Self {
        Self {
            store,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<DiscEntity> for JsonDiscRepository {
    async fn create(&self, entity: &DiscEntity) -> ShareResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.store
            .put_item(table_name, entity.barcode.as_str(), val, PutCondition::NotExists)
            .await.map(|_| 1)
    }

    async fn update(&self, entity: &DiscEntity) -> ShareResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let mut next = entity.clone();
        next.version = entity.version + 1;
        let val = serde_json::to_value(&next)?;
        self.store
            .put_item(table_name, entity.barcode.as_str(), val, PutCondition::VersionEquals(entity.version))
            .await.map(|_| 1)
    }

    async fn get(&self, id: &str) -> ShareResult<Option<DiscEntity>> {
        let table_name: &str = self.table_name.as_ref();
        match self.store.get_item(table_name, id).await {
            Some(item) => map_to_disc(item).map(Some),
            None => Ok(None),
        }
    }

    async fn contains_key(&self, id: &str) -> ShareResult<bool> {
        Ok(self.store.contains_key(self.table_name.as_str(), id).await)
    }

    async fn get_all(&self) -> ShareResult<Vec<DiscEntity>> {
        let table_name: &str = self.table_name.as_ref();
        self.store.scan(table_name).await.into_iter().map(map_to_disc).collect()
    }
}

impl DiscRepository for JsonDiscRepository {}

fn map_to_disc(item: Value) -> ShareResult<DiscEntity> {
    serde_json::from_value(item).map_err(|err| {
        ShareError::database(format!("corrupt disc document {}", err).as_str(),
                             Some("CorruptDocument".to_string()), false)
    })
}
