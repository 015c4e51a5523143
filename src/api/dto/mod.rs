//! Data Transfer Objects bound from request bodies.
//!
//! All DTOs use Serde; form bodies are decoded by Axum's `Form` extractor.

pub mod token_exchange;

pub use token_exchange::TokenExchangeRequest;
