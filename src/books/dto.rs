use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::isbn::is_valid_isbn13;

// BookDto is the wire form of a book. A field left out of the request body stays None
// and counts as missing, same as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            isbn: Some(isbn.to_string()),
        }
    }

    pub fn check_isbn(&self) -> bool {
        self.isbn.as_deref().map(is_valid_isbn13).unwrap_or(false)
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn author(&self) -> Option<&str> {
        present(&self.author)
    }

    pub fn isbn(&self) -> Option<&str> {
        present(&self.isbn)
    }
}

// empty strings are treated like absent fields
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: Some(other.title.to_string()),
            author: Some(other.author.to_string()),
            isbn: Some(other.isbn.to_string()),
        }
    }
}
