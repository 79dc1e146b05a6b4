use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::utils::store::JsonStore;

pub const BOOKS_TABLE: &str = "books";

pub fn create_book_repository(store: Arc<JsonStore>) -> Box<dyn BookRepository> {
    Box::new(JsonBookRepository::new(store, BOOKS_TABLE))
}
