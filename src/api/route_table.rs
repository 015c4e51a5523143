//! Explicit route registry.
//!
//! Routes are declared as an ordered list of [`RouteDescriptor`]s under a
//! context path. The table is built once at startup, can be inspected (for
//! `--print-routes` and tests) and is then turned into an Axum router with
//! [`RouteTable::into_router`]. Nothing in it changes afterwards.

use std::fmt;

use axum::{
    Router,
    handler::Handler,
    http::Method,
    middleware,
    routing::{self, MethodRouter},
};

use crate::api::middleware::content_type::{apply_produces, require_consumes};
use crate::state::AppState;

/// One route: method, path template and declared media types.
pub struct RouteDescriptor {
    method: Method,
    path: &'static str,
    consumes: Option<&'static str>,
    produces: Option<&'static str>,
    handler: MethodRouter<AppState>,
}

impl RouteDescriptor {
    /// Declares a `GET` route. `path` is relative to the context path and may
    /// contain `{name}` placeholders.
    pub fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::GET, path, routing::get(handler))
    }

    /// Declares a `POST` route.
    pub fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(Method::POST, path, routing::post(handler))
    }

    fn new(method: Method, path: &'static str, handler: MethodRouter<AppState>) -> Self {
        Self {
            method,
            path,
            consumes: None,
            produces: None,
            handler,
        }
    }

    /// Requires requests to carry this `Content-Type`.
    pub fn consumes(mut self, media_type: &'static str) -> Self {
        self.consumes = Some(media_type);
        self
    }

    /// Stamps this `Content-Type` on successful responses.
    pub fn produces(mut self, media_type: &'static str) -> Self {
        self.produces = Some(media_type);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn consumed_type(&self) -> Option<&'static str> {
        self.consumes
    }

    pub fn produced_type(&self) -> Option<&'static str> {
        self.produces
    }

    /// Wraps the handler with the checks for its declared media types.
    ///
    /// The checks only run for matched methods; other methods keep the
    /// default `405 Method Not Allowed`.
    fn into_method_router(self) -> MethodRouter<AppState> {
        let mut handler = self.handler;

        if let Some(consumes) = self.consumes {
            handler =
                handler.route_layer(middleware::from_fn_with_state(consumes, require_consumes));
        }
        if let Some(produces) = self.produces {
            handler = handler.route_layer(middleware::map_response_with_state(
                produces,
                apply_produces,
            ));
        }

        handler
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("consumes", &self.consumes)
            .field("produces", &self.produces)
            .finish_non_exhaustive()
    }
}

/// Ordered route declarations sharing one context path.
#[derive(Debug)]
pub struct RouteTable {
    context_path: String,
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Creates an empty table mounted at `context_path`.
    ///
    /// An empty context path mounts the routes at the root.
    pub fn new(context_path: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
            routes: Vec::new(),
        }
    }

    /// Appends a route.
    pub fn route(mut self, route: RouteDescriptor) -> Self {
        self.routes.push(route);
        self
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Full request path of `route`, context path included.
    pub fn full_path(&self, route: &RouteDescriptor) -> String {
        format!("{}{}", self.context_path, route.path)
    }

    /// Builds the router. Routes are registered in declaration order.
    ///
    /// # Panics
    ///
    /// Panics if two routes share a method and path, like [`Router::route`].
    pub fn into_router(self) -> Router<AppState> {
        let mut router = Router::new();

        for route in self.routes {
            tracing::info!(
                method = %route.method,
                path = %format!("{}{}", self.context_path, route.path),
                consumes = route.consumes.unwrap_or("-"),
                produces = route.produces.unwrap_or("-"),
                "Registered route"
            );

            let path = route.path;
            router = router.route(path, route.into_method_router());
        }

        if self.context_path.is_empty() {
            router
        } else {
            Router::new().nest(&self.context_path, router)
        }
    }
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for route in &self.routes {
            writeln!(
                f,
                "{:<6} {:<36} consumes={:<34} produces={}",
                route.method.as_str(),
                self.full_path(route),
                route.consumes.unwrap_or("-"),
                route.produces.unwrap_or("(binding mode)"),
            )?;
        }
        Ok(())
    }
}
