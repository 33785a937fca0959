use crate::controller::{Outcome, RequestKind, Ticket};
use crate::posts::Post;
use crate::ui::editor::FormIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// Show the blank create form. Replaces any open edit form.
    OpenCreate,
    /// Show the edit form pre-filled with `post`.
    StartEdit { post: Post },
    /// Explicit cancel from the form or overlay.
    CloseModal,
    /// Keystroke for the open form.
    Form(FormIntent),
    /// A request was handed to the backend.
    Started { ticket: Ticket, request: RequestKind },
    /// A request finished; errors are already rendered to messages.
    Completed {
        ticket: Ticket,
        outcome: Outcome<String>,
    },
}

impl Intent for PostsIntent {}
