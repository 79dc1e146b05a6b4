use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const DEFAULT_AUTH_TIMEOUT_MS: u64 = 2000;

// Configuration abstracts config options for the media service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub env: String,
    // JSON file backing the store, memory only when absent
    pub data_file: Option<String>,
    // base url of the auth service, the token is appended to it
    pub auth_url: Option<String>,
    pub auth_timeout_ms: u64,
}

impl Configuration {
    pub fn new(env: &str) -> Self {
        Configuration {
            env: env.to_string(),
            data_file: None,
            auth_url: None,
            auth_timeout_ms: DEFAULT_AUTH_TIMEOUT_MS,
        }
    }

    pub fn from_env(env: &str) -> Self {
        Configuration::from_lookup(env, |name| std::env::var(name).ok())
    }

    // overrides the defaults with whatever `lookup` finds, blank values are ignored
    pub fn from_lookup<F>(env: &str, lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Configuration::new(env);
        config.data_file = var("SHAREIT_DATA_FILE");
        config.auth_url = var("SHAREIT_AUTH_URL");
        if let Some(timeout) = var("SHAREIT_AUTH_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(ms) => config.auth_timeout_ms = ms,
                Err(_) => tracing::warn!(%timeout, "ignoring malformed SHAREIT_AUTH_TIMEOUT_MS"),
            }
        }
        config
    }
}
