use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// DiscEntity is the stored form of a disc, keyed by its barcode within the discs table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscEntity {
    pub barcode: String,
    pub version: i64,
    pub title: String,
    pub director: String,
}

impl DiscEntity {
    pub fn new(barcode: &str, title: &str, director: &str) -> Self {
        Self {
            barcode: barcode.to_string(),
            version: 0,
            title: title.to_string(),
            director: director.to_string(),
        }
    }
}

impl Identifiable for DiscEntity {
    fn id(&self) -> String {
        self.barcode.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
