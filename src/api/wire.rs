//! JSON envelopes used by the posts service.

use serde::{Deserialize, Serialize};

use crate::posts::Post;

/// `GET /posts` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsEnvelope {
    pub posts: Vec<Post>,
}

/// `POST /posts` response, and the preferred `PUT /posts/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope {
    pub post: Post,
}

/// Shapes accepted from a successful update.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UpdateBody {
    Wrapped(PostEnvelope),
    Bare(Post),
}

impl UpdateBody {
    pub(crate) fn into_post(self) -> Post {
        match self {
            UpdateBody::Wrapped(envelope) => envelope.post,
            UpdateBody::Bare(post) => post,
        }
    }
}
