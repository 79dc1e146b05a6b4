pub mod command;
pub mod controller;
pub mod domain;
pub mod repository;
pub mod shareit;
