//! Declared sample routes.

use crate::api::binding::{APPLICATION_JSON, FORM_URLENCODED, TEXT_PLAIN};
use crate::api::handlers::{
    forms_handler, greetings_handler, hello_name_handler, say_hello_handler,
    say_hello_object_handler,
};
use crate::api::route_table::{RouteDescriptor, RouteTable};

/// Route table mounted at `context_path`.
///
/// # Endpoints
///
/// - `POST /forms`                - Echo a form-encoded token-exchange request as JSON
/// - `GET  /say/hello`            - Fixed `Hello World!`
/// - `GET  /say/hello/{name}`     - Greeting for `name`
/// - `GET  /say/helloObject/{name}` - Greeting [`Message`](crate::domain::Message), binding mode format
/// - `GET  /say/greetings/{name}` - Greeting for `name`
pub fn route_table(context_path: &str) -> RouteTable {
    RouteTable::new(context_path)
        .route(
            RouteDescriptor::post("/forms", forms_handler)
                .consumes(FORM_URLENCODED)
                .produces(APPLICATION_JSON),
        )
        .route(RouteDescriptor::get("/say/hello", say_hello_handler).produces(TEXT_PLAIN))
        .route(RouteDescriptor::get("/say/hello/{name}", hello_name_handler).produces(TEXT_PLAIN))
        .route(RouteDescriptor::get(
            "/say/helloObject/{name}",
            say_hello_object_handler,
        ))
        .route(
            RouteDescriptor::get("/say/greetings/{name}", greetings_handler).produces(TEXT_PLAIN),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[test]
    fn test_declared_routes() {
        let table = route_table("/camel");

        let declared: Vec<_> = table
            .routes()
            .iter()
            .map(|r| {
                (
                    r.method().clone(),
                    table.full_path(r),
                    r.consumed_type(),
                    r.produced_type(),
                )
            })
            .collect();

        assert_eq!(
            declared,
            vec![
                (
                    Method::POST,
                    "/camel/forms".to_string(),
                    Some(FORM_URLENCODED),
                    Some(APPLICATION_JSON),
                ),
                (Method::GET, "/camel/say/hello".to_string(), None, Some(TEXT_PLAIN)),
                (Method::GET, "/camel/say/hello/{name}".to_string(), None, Some(TEXT_PLAIN)),
                (Method::GET, "/camel/say/helloObject/{name}".to_string(), None, None),
                (Method::GET, "/camel/say/greetings/{name}".to_string(), None, Some(TEXT_PLAIN)),
            ]
        );
    }
}
