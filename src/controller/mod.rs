//! Post-collection controller.
//!
//! Owns the collection state and turns user actions into backend requests.
//! A request goes through three steps:
//!
//! ```text
//! begin(Request) ──→ PendingRequest ──→ execute(api) ──→ Completion ──→ complete()
//!   (in flight)                          (HTTP call)                    (state patched)
//! ```
//!
//! `begin` and `complete` run on the UI side and are synchronous; `execute`
//! is the only step that awaits, so the terminal UI can hand it to a worker
//! while `Session` simply runs the three steps back to back.
//! Local state is only patched in `complete`, after the backend confirmed.

mod error;
mod outcome;
mod request;
mod session;
mod worker;

pub use error::ControllerError;
pub use outcome::{execute, Completion, Outcome};
pub use request::{Operation, PendingRequest, Request, RequestKind, Ticket};
pub use session::Session;
pub use worker::{spawn_worker, RequestSender};

use crate::posts::Post;
use crate::ui::editor::{FormIntent, Submission};
use crate::ui::mvi::Reducer;
use crate::ui::posts::{PostsIntent, PostsReducer, PostsState};

#[derive(Debug, Default)]
pub struct PostsController {
    state: PostsState,
    next_ticket: u64,
}

impl PostsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PostsState {
        &self.state
    }

    /// Run an intent through the reducer.
    pub fn dispatch(&mut self, intent: PostsIntent) {
        self.state = PostsReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn open_create(&mut self) {
        self.dispatch(PostsIntent::OpenCreate);
    }

    /// Record `post` as currently being edited.
    pub fn start_edit(&mut self, post: Post) {
        self.dispatch(PostsIntent::StartEdit { post });
    }

    pub fn close_modal(&mut self) {
        self.dispatch(PostsIntent::CloseModal);
    }

    pub fn edit_form(&mut self, intent: FormIntent) {
        self.dispatch(PostsIntent::Form(intent));
    }

    /// Mark `request` as in flight and issue its ticket.
    pub fn begin(&mut self, request: Request) -> PendingRequest {
        self.next_ticket += 1;
        let ticket = Ticket::new(self.next_ticket);
        self.dispatch(PostsIntent::Started {
            ticket,
            request: request.kind(),
        });
        PendingRequest { ticket, request }
    }

    /// Submit the open form.
    ///
    /// A create form closes as soon as it is submitted; an edit form stays
    /// open until the update succeeds. Returns `None` when no form is open.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        let submission = self.state.modal.form()?.submission();
        let request = match submission {
            Submission::Create(draft) => {
                self.close_modal();
                Request::Create(draft)
            }
            Submission::Update(post) => Request::Update(post),
        };
        Some(self.begin(request))
    }

    /// Apply a finished request to state and report its result.
    ///
    /// Failures land in the shared error slot and are also returned, so a
    /// caller can react to its own operation without reading state.
    pub fn complete(&mut self, completion: Completion) -> Result<(), ControllerError> {
        let Completion { ticket, outcome } = completion;
        let operation = outcome.operation();

        if self.state.is_stale(ticket, &outcome) {
            tracing::debug!(%ticket, %operation, "discarding superseded completion");
        }

        let mut failure = None;
        let outcome = outcome.map_err(|source| {
            let error = ControllerError::new(operation, source);
            let message = error.to_string();
            failure = Some(error);
            message
        });
        self.dispatch(PostsIntent::Completed { ticket, outcome });

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
