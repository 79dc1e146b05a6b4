use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde_json::Value;
use tokio::sync::RwLock;
use crate::core::repository::RepositoryStore;
use crate::core::shareit::{ShareError, ShareResult};

type Tables = HashMap<String, HashMap<String, Value>>;

// PutCondition mirrors conditional writes of a document store
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PutCondition {
    // key must not be present yet
    NotExists,
    // key must be present and its `version` attribute must match
    VersionEquals(i64),
}

// JsonStore keeps JSON documents in named tables, optionally mirrored to a file.
// Every write holds the table lock until the file is flushed so readers never see
// a document that is not persisted.
#[derive(Debug)]
pub struct JsonStore {
    tables: RwLock<Tables>,
    file: Option<PathBuf>,
}

impl JsonStore {
    pub fn memory() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            file: None,
        }
    }

    pub async fn open(path: &str) -> ShareResult<Self> {
        let file = PathBuf::from(path);
        let tables = if tokio::fs::try_exists(&file).await? {
            let bytes = tokio::fs::read(&file).await?;
            if bytes.iter().all(|b| b.is_ascii_whitespace()) {
                HashMap::new()
            } else {
                serde_json::from_slice::<Tables>(&bytes)?
            }
        } else {
            HashMap::new()
        };
        tracing::info!(path = %file.display(), tables = tables.len(), "opened json store");
        Ok(Self {
            tables: RwLock::new(tables),
            file: Some(file),
        })
    }

    pub async fn put_item(&self, table_name: &str, key: &str, item: Value,
                          condition: PutCondition) -> ShareResult<()> {
        let mut tables = self.tables.write().await;
        let table = tables.entry(table_name.to_string()).or_default();
        match condition {
            PutCondition::NotExists => {
                if table.contains_key(key) {
                    return Err(ShareError::duplicate_key(
                        format!("{} already exists in {}", key, table_name).as_str()));
                }
            }
            PutCondition::VersionEquals(expected) => {
                match table.get(key) {
                    None => {
                        return Err(ShareError::not_found(
                            format!("{} not found in {}", key, table_name).as_str()));
                    }
                    Some(existing) => {
                        let actual = parse_number_attribute("version", existing);
                        if actual != expected {
                            return Err(ShareError::unavailable(
                                format!("stale version {} of {} in {}, stored {}",
                                        expected, key, table_name, actual).as_str(),
                                Some("ConditionalCheckFailed".to_string()), true));
                        }
                    }
                }
            }
        }

        let previous = table.insert(key.to_string(), item);
        if let Err(err) = self.flush(&tables).await {
            // keep memory in line with the file
            if let Some(table) = tables.get_mut(table_name) {
                match previous {
                    Some(old) => { table.insert(key.to_string(), old); }
                    None => { table.remove(key); }
                }
            }
            return Err(err);
        }
        Ok(())
    }

    pub async fn get_item(&self, table_name: &str, key: &str) -> Option<Value> {
        let tables = self.tables.read().await;
        tables.get(table_name).and_then(|table| table.get(key)).cloned()
    }

    pub async fn contains_key(&self, table_name: &str, key: &str) -> bool {
        let tables = self.tables.read().await;
        tables.get(table_name).map(|table| table.contains_key(key)).unwrap_or(false)
    }

    pub async fn scan(&self, table_name: &str) -> Vec<Value> {
        let tables = self.tables.read().await;
        tables.get(table_name).map(|table| table.values().cloned().collect()).unwrap_or_default()
    }

    async fn flush(&self, tables: &Tables) -> ShareResult<()> {
        if let Some(file) = &self.file {
            let json = serde_json::to_vec_pretty(tables)?;
            let tmp = tmp_path(file);
            tokio::fs::write(&tmp, json).await?;
            tokio::fs::rename(&tmp, file).await?;
        }
        Ok(())
    }
}

fn tmp_path(file: &Path) -> PathBuf {
    let mut name = file.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    file.with_file_name(name)
}

pub(crate) fn parse_number_attribute(name: &str, item: &Value) -> i64 {
    item.get(name).and_then(Value::as_i64).unwrap_or(0)
}

// helper method to build the store backing all repositories
pub async fn build_store(store: &RepositoryStore) -> ShareResult<Arc<JsonStore>> {
    match store {
        RepositoryStore::Memory => Ok(Arc::new(JsonStore::memory())),
        RepositoryStore::JsonFile(path) => Ok(Arc::new(JsonStore::open(path).await?)),
    }
}
