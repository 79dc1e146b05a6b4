use serde::{Deserialize, Serialize};
use crate::discs::domain::model::DiscEntity;

// DiscDto is the wire form of a disc, absent fields stay None.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

impl DiscDto {
    pub fn new(title: &str, director: &str, barcode: &str) -> DiscDto {
        DiscDto {
            title: Some(title.to_string()),
            director: Some(director.to_string()),
            barcode: Some(barcode.to_string()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|v| !v.is_empty())
    }

    pub fn director(&self) -> Option<&str> {
        self.director.as_deref().filter(|v| !v.is_empty())
    }

    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref().filter(|v| !v.is_empty())
    }
}

impl From<&DiscEntity> for DiscDto {
    fn from(other: &DiscEntity) -> Self {
        Self {
            title: Some(other.title.to_string()),
            director: Some(other.director.to_string()),
            barcode: Some(other.barcode.to_string()),
        }
    }
}
