use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a book, keyed by its ISBN within the books table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("978-0-306-40615-7", "title", "author");
        assert_eq!("978-0-306-40615-7", book.id().as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(0, book.version());
    }
}
