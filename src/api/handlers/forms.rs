//! Handler for the token-exchange form endpoint.

use axum::{Form, Json, extract::rejection::FormRejection};

use crate::api::dto::TokenExchangeRequest;
use crate::error::AppError;

/// Echoes a form-encoded token-exchange request back as JSON.
///
/// # Endpoint
///
/// `POST /camel/forms`
///
/// # Request Body
///
/// ```text
/// grant_type=client_credentials&client_id=abc
/// ```
///
/// # Response
///
/// ```json
/// {
///   "client_id": "abc",
///   "client_secret": "",
///   "grant_type": "client_credentials",
///   "subject_token": "",
///   "subject_issuer": "",
///   "subject_token_type": "",
///   "audience": ""
/// }
/// ```
///
/// The bound request is logged verbatim. Nothing is validated.
///
/// # Errors
///
/// Returns [`AppError::Binding`] if the body cannot be decoded as a form.
pub async fn forms_handler(
    payload: Result<Form<TokenExchangeRequest>, FormRejection>,
) -> Result<Json<TokenExchangeRequest>, AppError> {
    let Form(request) = payload?;

    tracing::info!("{request}");

    Ok(Json(request))
}
