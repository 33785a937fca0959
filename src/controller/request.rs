use std::fmt;

use crate::api::ApiError;
use crate::controller::outcome::{Completion, Outcome};
use crate::posts::{Post, PostDraft, PostId};

/// Sequence token issued for every request, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four backend operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Text shown to the user when the operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch posts",
            Operation::Create => "Failed to add post",
            Operation::Update => "Failed to update post",
            Operation::Delete => "Failed to delete post",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        })
    }
}

/// A backend call together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Create(PostDraft),
    Update(Post),
    Delete(PostId),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::List => Operation::List,
            Request::Create(_) => Operation::Create,
            Request::Update(_) => Operation::Update,
            Request::Delete(_) => Operation::Delete,
        }
    }

    /// Payload-free description, as recorded in state while in flight.
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::List => RequestKind::List,
            Request::Create(_) => RequestKind::Create,
            Request::Update(post) => RequestKind::Update {
                id: post.id.clone(),
            },
            Request::Delete(id) => RequestKind::Delete { id: id.clone() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    List,
    Create,
    Update { id: PostId },
    Delete { id: PostId },
}

/// A request already counted as in flight, waiting to be executed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub request: Request,
}

impl PendingRequest {
    /// Resolve the request without executing it.
    pub fn fail(self, error: ApiError) -> Completion {
        let outcome = match self.request {
            Request::List => Outcome::Listed(Err(error)),
            Request::Create(_) => Outcome::Created(Err(error)),
            Request::Update(post) => Outcome::Updated {
                id: post.id,
                result: Err(error),
            },
            Request::Delete(id) => Outcome::Deleted {
                id,
                result: Err(error),
            },
        };
        Completion::new(self.ticket, outcome)
    }
}
