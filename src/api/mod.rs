//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`binding`] - Binding modes and response marshaling
//! - [`dto`] - Data Transfer Objects bound from request bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Failure normalization, media type checks, tracing
//! - [`route_table`] - Route descriptor registry
//! - [`routes`] - The declared sample routes

pub mod binding;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod route_table;
pub mod routes;
