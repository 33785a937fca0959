use crate::api::{ApiError, PostsApi};
use crate::controller::request::{Operation, PendingRequest, Request, Ticket};
use crate::posts::{Post, PostId};

/// Result of one backend call. `E` is `ApiError` on the wire side and the
/// rendered message once it reaches state.
#[derive(Debug)]
pub enum Outcome<E = ApiError> {
    Listed(Result<Vec<Post>, E>),
    Created(Result<Post, E>),
    Updated { id: PostId, result: Result<Post, E> },
    Deleted { id: PostId, result: Result<(), E> },
}

impl<E> Outcome<E> {
    pub fn operation(&self) -> Operation {
        match self {
            Outcome::Listed(_) => Operation::List,
            Outcome::Created(_) => Operation::Create,
            Outcome::Updated { .. } => Operation::Update,
            Outcome::Deleted { .. } => Operation::Delete,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Listed(result) => result.as_ref().err(),
            Outcome::Created(result) => result.as_ref().err(),
            Outcome::Updated { result, .. } => result.as_ref().err(),
            Outcome::Deleted { result, .. } => result.as_ref().err(),
        }
    }

    pub fn map_err<F, E2>(self, f: F) -> Outcome<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Listed(result) => Outcome::Listed(result.map_err(f)),
            Outcome::Created(result) => Outcome::Created(result.map_err(f)),
            Outcome::Updated { id, result } => Outcome::Updated {
                id,
                result: result.map_err(f),
            },
            Outcome::Deleted { id, result } => Outcome::Deleted {
                id,
                result: result.map_err(f),
            },
        }
    }
}

impl<E: Clone> Clone for Outcome<E> {
    fn clone(&self) -> Self {
        match self {
            Outcome::Listed(result) => Outcome::Listed(result.clone()),
            Outcome::Created(result) => Outcome::Created(result.clone()),
            Outcome::Updated { id, result } => Outcome::Updated {
                id: id.clone(),
                result: result.clone(),
            },
            Outcome::Deleted { id, result } => Outcome::Deleted {
                id: id.clone(),
                result: result.clone(),
            },
        }
    }
}

impl<E: PartialEq> PartialEq for Outcome<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Listed(a), Outcome::Listed(b)) => a == b,
            (Outcome::Created(a), Outcome::Created(b)) => a == b,
            (
                Outcome::Updated { id, result },
                Outcome::Updated {
                    id: other_id,
                    result: other_result,
                },
            ) => id == other_id && result == other_result,
            (
                Outcome::Deleted { id, result },
                Outcome::Deleted {
                    id: other_id,
                    result: other_result,
                },
            ) => id == other_id && result == other_result,
            _ => false,
        }
    }
}

/// A finished request, ready to be applied by the controller.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

impl Completion {
    pub fn new(ticket: Ticket, outcome: Outcome) -> Self {
        Self { ticket, outcome }
    }
}

/// Perform the backend call for `pending`. State is left to the caller.
pub async fn execute<A>(api: &A, pending: PendingRequest) -> Completion
where
    A: PostsApi + ?Sized,
{
    let PendingRequest { ticket, request } = pending;
    let operation = request.operation();
    tracing::debug!(%ticket, %operation, "dispatching request");

    let outcome = match request {
        Request::List => Outcome::Listed(api.list().await),
        Request::Create(draft) => Outcome::Created(api.create(&draft).await),
        Request::Update(post) => {
            let result = api.update(&post).await;
            Outcome::Updated {
                id: post.id,
                result,
            }
        }
        Request::Delete(id) => {
            let result = api.delete(&id).await;
            Outcome::Deleted { id, result }
        }
    };

    match outcome.error() {
        Some(error) => tracing::warn!(%ticket, %operation, %error, "request failed"),
        None => tracing::debug!(%ticket, %operation, "request completed"),
    }

    Completion { ticket, outcome }
}
