//! # REST samples
//!
//! Sample REST endpoints served by Axum behind an explicit route table and a
//! single global error normalizer.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Payload types and the greeting component contract
//! - **Application Layer** ([`application`]) - Greeting component implementation
//! - **API Layer** ([`api`]) - Route table, handlers, DTOs, binding and middleware
//!
//! ## Endpoints
//!
//! | Method | Path | Produces |
//! |---|---|---|
//! | POST | `/camel/forms` | `application/json` (echo of the form fields) |
//! | GET | `/camel/say/hello` | `text/plain` |
//! | GET | `/camel/say/hello/{name}` | `text/plain` |
//! | GET | `/camel/say/helloObject/{name}` | binding mode |
//! | GET | `/camel/say/greetings/{name}` | `text/plain` |
//!
//! Any failure while a route executes is answered with `503` and the body
//! `error : <message>`, with the request headers copied onto the response.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl http://localhost:8080/camel/say/hello/Ada
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::binding::BindingMode;
    pub use crate::api::dto::TokenExchangeRequest;
    pub use crate::application::services::HelloService;
    pub use crate::domain::{Greeter, Message};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
