//! Route handlers for `/api/posts`.
//!
//! Each handler takes the shared store explicitly plus the request, and
//! returns either a typed JSON body or an [`ApiError`].

use std::sync::Arc;

use serde::Serialize;

use super::error::ApiError;
use super::model::{NewPost, Post, PostPatch};
use super::query::{SearchQuery, SortOrder};
use super::store::PostStore;
use crate::request::Request;
use crate::response::Json;
use crate::status::Status;

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: String,
}

/// `GET /api/posts?sort=&direction=`
pub async fn list(store: Arc<PostStore>, req: Request) -> Result<Json<Vec<Post>>, ApiError> {
    let order = SortOrder::parse(req.query("sort"), req.query("direction"))?;
    Ok(Json(store.list(order.as_ref()).await))
}

/// `GET /api/posts/search?title=&content=`
pub async fn search(store: Arc<PostStore>, req: Request) -> Json<Vec<Post>> {
    let query = SearchQuery::new(req.query("title"), req.query("content"));
    Json(store.search(&query).await)
}

/// `POST /api/posts`
pub async fn create(store: Arc<PostStore>, req: Request) -> Result<(Status, Json<Post>), ApiError> {
    let new = NewPost::from_body(req.json().ok())?;
    let post = store.create(new).await;
    Ok((Status::Created, Json(post)))
}

/// `PUT /api/posts/{id}`
///
/// An unknown id is reported before a bad body.
pub async fn update(store: Arc<PostStore>, req: Request) -> Result<Json<Post>, ApiError> {
    let id = post_id(&req)?;
    let patch = PostPatch::from_body(req.json().ok());
    Ok(Json(store.update(id, patch).await?))
}

/// `DELETE /api/posts/{id}`
pub async fn delete(store: Arc<PostStore>, req: Request) -> Result<Json<Deleted>, ApiError> {
    let id = post_id(&req)?;
    let post = store.delete(id).await?;
    Ok(Json(Deleted {
        message: format!("Post with id {} has been deleted successfully.", post.id),
    }))
}

/// An id that is not a number can never name a post, so it is reported as
/// not found with the raw text.
fn post_id(req: &Request) -> Result<u64, ApiError> {
    let raw = req.param("id").unwrap_or_default();
    raw.parse().map_err(|_| ApiError::NotFound(raw.to_owned()))
}
