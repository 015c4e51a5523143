//! Enforcement of the media types a route declares.
//!
//! Attached per route by [`RouteTable`](crate::api::route_table::RouteTable):
//!
//! - [`require_consumes`] fails the request when its `Content-Type` is not the
//!   declared consumed type. The failure goes through the error normalizer.
//! - [`apply_produces`] stamps the declared produced type on successful
//!   responses that carry a different one.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

use crate::api::binding::essence;
use crate::error::AppError;

/// Rejects requests whose `Content-Type` does not match `expected`.
///
/// # Errors
///
/// Returns [`AppError::Binding`] when the header is missing or differs.
pub async fn require_consumes(
    State(expected): State<&'static str>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let actual = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(essence);

    match actual {
        Some(actual) if actual == expected => Ok(next.run(req).await),
        Some(actual) => Err(AppError::binding(format!(
            "Unsupported content type '{actual}', expected '{expected}'"
        ))),
        None => Err(AppError::binding(format!(
            "Missing content type, expected '{expected}'"
        ))),
    }
}

/// Sets `Content-Type` to `produces` on successful responses.
///
/// Parameters already present (such as a charset) are kept when the media
/// type itself matches.
pub async fn apply_produces(State(produces): State<&'static str>, mut res: Response) -> Response {
    if !res.status().is_success() {
        return res;
    }

    let matches = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| essence(value) == produces);

    if !matches {
        res.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(produces));
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::binding::{APPLICATION_JSON, FORM_URLENCODED, TEXT_PLAIN};
    use axum::{
        Router,
        body::Body,
        http::StatusCode,
        middleware,
        routing::{get, post},
    };
    use tower::ServiceExt;

    fn consuming_app() -> Router {
        Router::new().route(
            "/in",
            post(|| async { "accepted" }).route_layer(middleware::from_fn_with_state(
                FORM_URLENCODED,
                require_consumes,
            )),
        )
    }

    fn producing_app() -> Router {
        Router::new()
            .route(
                "/text",
                get(|| async { "plain" }).route_layer(middleware::map_response_with_state(
                    TEXT_PLAIN,
                    apply_produces,
                )),
            )
            .route(
                "/json",
                get(|| async { "{}" }).route_layer(middleware::map_response_with_state(
                    APPLICATION_JSON,
                    apply_produces,
                )),
            )
            .route(
                "/fail",
                get(|| async { Err::<String, _>(AppError::handler("nope")) }).route_layer(
                    middleware::map_response_with_state(APPLICATION_JSON, apply_produces),
                ),
            )
    }

    async fn post_with(content_type: Option<&'static str>) -> Response {
        let mut builder = Request::builder().method("POST").uri("/in");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        consuming_app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_consumes_accepts_declared_type_with_params() {
        let response = post_with(Some("application/x-www-form-urlencoded; charset=utf-8")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_consumes_rejects_other_type() {
        let response = post_with(Some("application/json")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_consumes_rejects_missing_type() {
        let response = post_with(None).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    async fn get_path(path: &str) -> Response {
        producing_app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_produces_keeps_matching_type_parameters() {
        let response = get_path("/text").await;
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_produces_overrides_other_type() {
        let response = get_path("/json").await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], APPLICATION_JSON);
    }

    #[tokio::test]
    async fn test_produces_leaves_failures_alone() {
        let response = get_path("/fail").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
