//! Global failure normalization.
//!
//! Wraps every route. Handlers, extractors and the panic catcher all turn a
//! failure into an [`AppError`](crate::error::AppError) response carrying a
//! [`HandledFailure`] marker. This middleware completes the exchange for
//! those responses:
//!
//! 1. Copies the inbound request headers onto the response
//! 2. Logs the failure message
//! 3. Forces the status to `503 Service Unavailable`
//!
//! Responses without the marker (successes, unmatched routes) pass through
//! untouched.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, header},
    middleware::Next,
    response::Response,
};

use crate::error::{FAILURE_STATUS, HandledFailure};

/// Inbound headers describing the request body framing.
///
/// The failure body replaces whatever the handler would have produced, so
/// these are never copied.
const BODY_FRAMING_HEADERS: [HeaderName; 4] = [
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::CONTENT_TYPE,
    header::CONTENT_ENCODING,
];

/// Normalizes failed exchanges.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::api::middleware::error_normalizer;
///
/// let app = Router::new()
///     .nest("/camel", routes)
///     .layer(middleware::from_fn(error_normalizer::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let inbound = req.headers().clone();

    let mut response = next.run(req).await;

    let Some(failure) = response.extensions().get::<HandledFailure>().cloned() else {
        return response;
    };

    copy_inbound_headers(&inbound, response.headers_mut());
    *response.status_mut() = FAILURE_STATUS;

    tracing::error!(kind = failure.kind, "{}", failure.message);

    response
}

/// Copies every inbound header onto `outbound`, replacing existing values.
///
/// Multi-valued headers keep all their values.
pub fn copy_inbound_headers(inbound: &HeaderMap, outbound: &mut HeaderMap) {
    for name in inbound.keys() {
        if BODY_FRAMING_HEADERS.contains(name) {
            continue;
        }

        outbound.remove(name);
        for value in inbound.get_all(name) {
            outbound.append(name.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{HeaderValue, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route(
                "/fail",
                get(|| async { Err::<String, _>(AppError::handler("bean exploded")) }),
            )
            .layer(middleware::from_fn(layer))
    }

    #[tokio::test]
    async fn test_failure_copies_request_headers() {
        let request = Request::builder()
            .uri("/fail")
            .header("x-correlation-id", "abc-123")
            .header("accept-language", "en")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers()["x-correlation-id"], "abc-123");
        assert_eq!(response.headers()["accept-language"], "en");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"error : bean exploded");
    }

    #[tokio::test]
    async fn test_success_is_untouched() {
        let request = Request::builder()
            .uri("/ok")
            .header("x-correlation-id", "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("x-correlation-id").is_none());
    }

    #[tokio::test]
    async fn test_unmatched_route_is_untouched() {
        let request = Request::builder()
            .uri("/missing")
            .header("x-correlation-id", "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("x-correlation-id").is_none());
    }

    #[test]
    fn test_copy_keeps_every_value_and_replaces_existing() {
        let mut inbound = HeaderMap::new();
        inbound.append("x-tag", HeaderValue::from_static("one"));
        inbound.append("x-tag", HeaderValue::from_static("two"));
        inbound.insert("x-single", HeaderValue::from_static("inbound"));

        let mut outbound = HeaderMap::new();
        outbound.insert("x-single", HeaderValue::from_static("outbound"));

        copy_inbound_headers(&inbound, &mut outbound);

        let tags: Vec<_> = outbound.get_all("x-tag").iter().collect();
        assert_eq!(tags, ["one", "two"]);
        assert_eq!(outbound["x-single"], "inbound");
        assert_eq!(outbound.get_all("x-single").iter().count(), 1);
    }

    #[test]
    fn test_copy_skips_body_framing_headers() {
        let mut inbound = HeaderMap::new();
        inbound.insert(header::CONTENT_LENGTH, HeaderValue::from_static("42"));
        inbound.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        inbound.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        inbound.insert(header::CONTENT_ENCODING, HeaderValue::from_static("gzip"));

        let mut outbound = HeaderMap::new();
        outbound.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        copy_inbound_headers(&inbound, &mut outbound);

        assert!(outbound.get(header::CONTENT_LENGTH).is_none());
        assert!(outbound.get(header::TRANSFER_ENCODING).is_none());
        assert!(outbound.get(header::CONTENT_ENCODING).is_none());
        assert_eq!(outbound[header::CONTENT_TYPE], "text/plain");
    }
}
