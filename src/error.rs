//! Route execution failures and their HTTP rendering.
//!
//! Every failure raised while a route executes ends up as an [`AppError`].
//! Rendering one produces the normalized failure response:
//!
//! - status `503 Service Unavailable`
//! - `text/plain` body `error : <message>`
//! - a [`HandledFailure`] extension carrying the message, which the
//!   [`error_normalizer`](crate::api::middleware::error_normalizer) uses to
//!   copy the inbound headers onto the response and log the failure
//!
//! Every variant renders the same way. The variant only records where the
//! failure came from, for the log line.

use std::any::Any;

use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Prefix of every failure body.
pub const ERROR_BODY_PREFIX: &str = "error : ";

/// Status code forced onto every failure response.
pub const FAILURE_STATUS: StatusCode = StatusCode::SERVICE_UNAVAILABLE;

/// A failure during route execution.
#[derive(Debug, Error)]
pub enum AppError {
    /// The handler (or a component it called) failed.
    #[error("{0}")]
    Handler(String),

    /// The request could not be bound to the route's declared inputs.
    #[error("{0}")]
    Binding(String),

    /// The response value could not be marshaled.
    #[error("{0}")]
    Marshal(String),

    /// The handler panicked.
    #[error("{0}")]
    Panic(String),
}

impl AppError {
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }

    pub fn binding(message: impl Into<String>) -> Self {
        Self::Binding(message.into())
    }

    pub fn marshal(message: impl Into<String>) -> Self {
        Self::Marshal(message.into())
    }

    /// Short name of the failure source, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Handler(_) => "handler",
            AppError::Binding(_) => "binding",
            AppError::Marshal(_) => "marshal",
            AppError::Panic(_) => "panic",
        }
    }

    /// Builds the error from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else {
            "handler panicked".to_string()
        };

        Self::Panic(message)
    }
}

/// Marker attached to normalized failure responses.
///
/// Holds the captured failure for the rest of the exchange.
#[derive(Debug, Clone)]
pub struct HandledFailure {
    pub kind: &'static str,
    pub message: String,
}

/// Formats a failure body: `error : <message>`.
pub fn failure_body(message: &str) -> String {
    format!("{ERROR_BODY_PREFIX}{message}")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = self.to_string();

        let mut response = (
            FAILURE_STATUS,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            failure_body(&message),
        )
            .into_response();

        response
            .extensions_mut()
            .insert(HandledFailure { kind, message });

        response
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Binding(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Binding(rejection.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Marshal(format!("JSON serialization failed: {e}"))
    }
}

/// Response factory for panics caught by `CatchPanicLayer`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::from_panic(payload).into_response()
}
