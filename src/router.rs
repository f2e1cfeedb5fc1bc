//! Radix-tree request router.
//!
//! One tree per HTTP method. You register a `(method, path)` pair, you get a
//! handler. Path parameters are extracted by the tree; query parameters are
//! decoded by [`Request`]. Nothing is registered implicitly.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use matchit::Router as MatchitRouter;
use tracing::Instrument;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{cors, trace};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use postbox::{Method, Request, Response, Router};
    /// # async fn update(_: Request) -> Response { Response::text("") }
    /// # async fn delete(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Put,    "/api/posts/{id}", update)
    ///     .on(Method::Delete, "/api/posts/{id}", delete);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid pattern or collides with an existing
    /// route for the same method. Routes are fixed at startup, so this is a
    /// programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Put, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, path, handler)
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Methods that have a route matching `path`, in `allow` header order.
    /// `HEAD` is allowed wherever `GET` is.
    pub(crate) fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let matches = |m: &Method| self.routes.get(m).is_some_and(|tree| tree.at(path).is_ok());
        Method::ALL
            .into_iter()
            .filter(|m| matches(m) || (*m == Method::Head && matches(&Method::Get)))
            .collect()
    }

    /// Routes one request through the middleware stack and its handler.
    ///
    /// This is the whole request pipeline minus the socket, so tests can
    /// drive the application without binding a port.
    pub async fn handle(&self, req: Request) -> Response {
        let span = trace::span(req.method().as_str(), req.path());
        async move {
            let started = Instant::now();
            let res = if req.method() == Method::Options {
                cors::preflight(&req)
            } else {
                self.route(req).await
            };
            let res = cors::apply(res);
            trace::finish(&res, started);
            res
        }
        .instrument(span)
        .await
    }

    async fn route(&self, req: Request) -> Response {
        if let Some((handler, params)) = self.lookup(req.method(), req.path()) {
            return handler.call(req.with_params(params)).await;
        }
        // HEAD without its own route runs the GET handler and drops the body.
        if req.method() == Method::Head {
            if let Some((handler, params)) = self.lookup(Method::Get, req.path()) {
                let mut res = handler.call(req.with_params(params)).await;
                res.body.clear();
                return res;
            }
        }
        self.unrouted(req.path())
    }

    fn unrouted(&self, path: &str) -> Response {
        let allowed = self.allowed_methods(path);
        if allowed.is_empty() {
            return Response::error(Status::NotFound, "Not found");
        }
        let mut res = Response::error(Status::MethodNotAllowed, "Method not allowed");
        res.set_header("allow", &join_methods(&allowed));
        res
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

pub(crate) fn join_methods(methods: &[Method]) -> String {
    methods.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
}
