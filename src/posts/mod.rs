//! The post store service: an in-memory collection of posts behind five
//! JSON endpoints.
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/api/posts` | list, optional `sort` + `direction` |
//! | GET | `/api/posts/search` | search by `title` / `content` |
//! | POST | `/api/posts` | create |
//! | PUT | `/api/posts/{id}` | partial update |
//! | DELETE | `/api/posts/{id}` | delete |

mod error;
pub mod handlers;
mod model;
mod query;
mod store;

use std::future::Future;
use std::sync::Arc;

pub use error::{ApiError, ErrorKind};
pub use model::{Field, NewPost, Post, PostPatch, seed};
pub use query::{Direction, SearchQuery, SortOrder};
pub use store::{IdStrategy, PostStore};

use crate::request::Request;
use crate::router::Router;

/// Registers the post endpoints on `router`, each bound to `store`.
pub fn routes(router: Router, store: &Arc<PostStore>) -> Router {
    router
        .get("/api/posts", with_store(Arc::clone(store), handlers::list))
        .get("/api/posts/search", with_store(Arc::clone(store), handlers::search))
        .post("/api/posts", with_store(Arc::clone(store), handlers::create))
        .put("/api/posts/{id}", with_store(Arc::clone(store), handlers::update))
        .delete("/api/posts/{id}", with_store(Arc::clone(store), handlers::delete))
}

/// Adapts a `(store, request)` handler to the router's `(request)` shape.
fn with_store<F, Fut>(
    store: Arc<PostStore>,
    handler: F,
) -> impl Fn(Request) -> Fut + Send + Sync + 'static
where
    F: Fn(Arc<PostStore>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
{
    move |req| handler(Arc::clone(&store), req)
}
