//! # postbox
//!
//! An in-memory post service with create, list, search, update and delete
//! over JSON, on top of a small hyper-based HTTP layer.
//!
//! ## The contract
//!
//! Posts live in process memory for the life of the process. There is no
//! persistence, no authentication and no pagination. All state is held by one
//! [`posts::PostStore`] constructed in `main` and handed to the route table;
//! nothing is global.
//!
//! The HTTP layer is deliberately explicit:
//!
//! - Radix-tree routing, one tree per method, via [`matchit`]
//! - `(method, path)` → handler registration with no annotations
//! - Path parameters from the tree, query parameters decoded on the request
//! - Permissive CORS and per-request tracing as plain middleware functions
//! - Graceful shutdown on SIGTERM / Ctrl-C
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use postbox::posts::{self, IdStrategy, PostStore};
//! use postbox::Server;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(PostStore::with_posts(IdStrategy::MaxPlusOne, posts::seed()));
//!     Server::bind(([0, 0, 0, 0], 5002).into())
//!         .serve(postbox::app(&store))
//!         .await
//!         .unwrap();
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod health;
pub mod middleware;
pub mod posts;

use std::sync::Arc;

pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, serve_with_shutdown};
pub use status::Status;

/// The full route table: the post endpoints plus health probes.
pub fn app(store: &Arc<posts::PostStore>) -> Router {
    posts::routes(Router::new(), store)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}
