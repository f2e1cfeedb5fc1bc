//! The in-memory post collection.
//!
//! Posts live in one `Vec` in insertion order behind a single
//! [`tokio::sync::RwLock`]. Listings and searches take the shared lock and
//! copy out what they return; create, update and delete take the exclusive
//! lock, so every mutation is one atomic scan-and-mutate step.

use clap::ValueEnum;
use tokio::sync::RwLock;
use tracing::debug;

use super::error::ApiError;
use super::model::{NewPost, Post, PostPatch};
use super::query::{SearchQuery, SortOrder};

/// How the store picks the id of a new post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdStrategy {
    /// One more than the highest live id, or `1` when empty. Deleting the
    /// highest post lets its id be issued again.
    MaxPlusOne,
    /// One more than the highest id ever issued. Ids are never reused.
    Monotonic,
}

#[derive(Debug, Default)]
struct Posts {
    items: Vec<Post>,
    /// Highest id ever issued by this store.
    high_water: u64,
}

impl Posts {
    fn next_id(&self, strategy: IdStrategy) -> u64 {
        match strategy {
            IdStrategy::MaxPlusOne => self.items.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            IdStrategy::Monotonic => self.high_water + 1,
        }
    }

    fn insert(&mut self, strategy: IdStrategy, new: NewPost) -> Post {
        let id = self.next_id(strategy);
        let post = Post { id, title: new.title, content: new.content };
        self.items.push(post.clone());
        self.high_water = self.high_water.max(id);
        post
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }
}

#[derive(Debug)]
pub struct PostStore {
    posts: RwLock<Posts>,
    strategy: IdStrategy,
}

impl PostStore {
    /// An empty store.
    pub fn new(strategy: IdStrategy) -> Self {
        Self { posts: RwLock::new(Posts::default()), strategy }
    }

    /// A store holding `posts`, with ids assigned in order.
    pub fn with_posts(strategy: IdStrategy, posts: impl IntoIterator<Item = NewPost>) -> Self {
        let mut inner = Posts::default();
        for new in posts {
            inner.insert(strategy, new);
        }
        Self { posts: RwLock::new(inner), strategy }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// All posts, in insertion order unless `order` is given. Sorting works
    /// on the copy; the stored order never changes.
    pub async fn list(&self, order: Option<&SortOrder>) -> Vec<Post> {
        let mut posts = self.posts.read().await.items.clone();
        if let Some(order) = order {
            order.apply(&mut posts);
        }
        posts
    }

    /// Posts matching `query`, in insertion order.
    pub async fn search(&self, query: &SearchQuery) -> Vec<Post> {
        self.posts
            .read()
            .await
            .items
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect()
    }

    /// Appends a post under a freshly assigned id.
    pub async fn create(&self, new: NewPost) -> Post {
        let post = self.posts.write().await.insert(self.strategy, new);
        debug!(id = post.id, "post created");
        post
    }

    /// Applies `patch` to the post with `id`, leaving the id untouched.
    ///
    /// `patch` is the outcome of body validation. An unknown id is reported
    /// ahead of a bad body, and both are decided under the same write lock.
    pub async fn update(
        &self,
        id: u64,
        patch: Result<PostPatch, ApiError>,
    ) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().await;
        let index = posts.position(id).ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        let patch = patch?;
        let post = &mut posts.items[index];
        patch.apply(post);
        debug!(id, "post updated");
        Ok(post.clone())
    }

    /// Removes and returns the post with `id`.
    pub async fn delete(&self, id: u64) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().await;
        let index = posts.position(id).ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        let post = posts.items.remove(index);
        debug!(id, "post deleted");
        Ok(post)
    }
}
