//! Service implementations backing the routes.

pub mod hello_service;

pub use hello_service::HelloService;
