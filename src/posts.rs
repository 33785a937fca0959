//! Post records as exchanged with the posts service.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Backend-assigned identifier.
///
/// Treated as opaque: services in the wild hand out either integers or
/// strings, so both are accepted and echoed back in the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(value) => write!(f, "{}", value),
            PostId::Text(value) => f.write_str(value),
        }
    }
}

impl FromStr for PostId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(value) => PostId::Number(value),
            Err(_) => PostId::Text(s.to_string()),
        })
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        PostId::Number(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId::Text(value.to_string())
    }
}

/// A persisted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub body: String,
}

impl Post {
    pub fn new(id: impl Into<PostId>, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            body: body.into(),
        }
    }
}

/// A post that has not been accepted by the backend yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub author: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }

    /// Attach a backend-assigned id.
    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            author: self.author,
            body: self.body,
        }
    }
}
