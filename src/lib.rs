pub mod auth;
pub mod books;
pub mod catalog;
pub mod core;
pub mod discs;
pub mod utils;
