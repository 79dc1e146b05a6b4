pub mod logs;
pub mod store;
