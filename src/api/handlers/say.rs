//! Handlers for the greeting routes under `/say`.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::HeaderMap,
    response::Response,
};

use crate::api::binding::render;
use crate::error::AppError;
use crate::state::AppState;

/// Fixed body of `GET /say/hello`.
pub const HELLO_WORLD: &str = "Hello World!";

/// Returns the fixed greeting.
///
/// # Endpoint
///
/// `GET /camel/say/hello`
pub async fn say_hello_handler() -> &'static str {
    tracing::info!("{HELLO_WORLD}");
    HELLO_WORLD
}

/// Greets the caller named in the path.
///
/// # Endpoint
///
/// `GET /camel/say/hello/{name}`
///
/// # Errors
///
/// Returns [`AppError`] if the path cannot be decoded or the greeter fails.
pub async fn hello_name_handler(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<String, AppError> {
    greet(&state, name)
}

/// Greets the caller named in the path.
///
/// Declared separately from [`hello_name_handler`] and routed through the
/// same greeter call.
///
/// # Endpoint
///
/// `GET /camel/say/greetings/{name}`
///
/// # Errors
///
/// Returns [`AppError`] if the path cannot be decoded or the greeter fails.
pub async fn greetings_handler(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<String, AppError> {
    greet(&state, name)
}

/// Decodes the path name and asks the greeter for its greeting.
fn greet(state: &AppState, name: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    let Path(name) = name?;

    let body = state.greeter.greetings(&name)?;
    tracing::info!("{body}");

    Ok(body)
}

/// Returns the greeting as a [`Message`](crate::domain::Message) object.
///
/// # Endpoint
///
/// `GET /camel/say/helloObject/{name}`
///
/// # Response
///
/// Rendered according to the process-wide binding mode:
///
/// ```json
/// { "text": "Hello Ada!" }
/// ```
///
/// or, with XML binding,
///
/// ```xml
/// <message><text>Hello Ada!</text></message>
/// ```
///
/// # Errors
///
/// Returns [`AppError`] if the path cannot be decoded, the greeter fails,
/// or the message cannot be marshaled.
pub async fn say_hello_object_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    name: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(name) = name?;

    let message = state.greeter.say_hello_object(&name)?;
    tracing::info!("{message}");

    render(&message, state.binding_mode.response_format(&headers))
}
