use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::shareit::ShareResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // creates an entity, fails with DuplicateKey when the key is taken
    async fn create(&self, entity: &Entity) -> ShareResult<usize>;

    // replaces an entity if its stored version still matches entity.version()
    async fn update(&self, entity: &Entity) -> ShareResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> ShareResult<Option<Entity>>;

    async fn contains_key(&self, id: &str) -> ShareResult<bool>;

    // all entities of the repository, in no particular order
    async fn get_all(&self) -> ShareResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum RepositoryStore {
    Memory,
    JsonFile(String),
}

impl RepositoryStore {
    pub fn from_data_file(data_file: Option<&str>) -> RepositoryStore {
        match data_file {
            Some(path) => RepositoryStore::JsonFile(path.to_string()),
            None => RepositoryStore::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_select_store() {
        assert_eq!(RepositoryStore::Memory, RepositoryStore::from_data_file(None));
        assert_eq!(RepositoryStore::JsonFile("media.json".to_string()),
                   RepositoryStore::from_data_file(Some("media.json")));
    }
}
