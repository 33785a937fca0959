//! Client side of the posts REST contract.
//!
//! - `GET /posts` returns `{ "posts": [...] }`
//! - `POST /posts` takes `{ author, body }` and returns `{ "post": {...} }`
//! - `PUT /posts/{id}` takes `{ id, author, body }`
//! - `DELETE /posts/{id}` needs no body
//!
//! Any non-2xx status is a failure.

mod client;
mod error;
mod wire;

pub use client::HttpPostsApi;
pub use error::ApiError;
pub use wire::{PostEnvelope, PostsEnvelope};

use async_trait::async_trait;

use crate::posts::{Post, PostDraft, PostId};

/// Backend operations the controller depends on.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the whole collection, in backend order.
    async fn list(&self) -> Result<Vec<Post>, ApiError>;

    /// Persist a new post and return it with its assigned id.
    async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError>;

    /// Replace all fields of an existing post.
    async fn update(&self, post: &Post) -> Result<Post, ApiError>;

    async fn delete(&self, id: &PostId) -> Result<(), ApiError>;
}
