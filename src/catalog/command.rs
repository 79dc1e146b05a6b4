pub mod add_book_cmd;
pub mod add_disc_cmd;
pub mod get_book_cmd;
pub mod get_books_cmd;
pub mod get_disc_cmd;
pub mod get_discs_cmd;
pub mod update_book_cmd;
pub mod update_disc_cmd;
