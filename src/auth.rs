pub mod controller;
pub mod domain;
pub mod factory;
pub mod http_authenticator;
