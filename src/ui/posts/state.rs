use std::collections::HashMap;

use crate::controller::{Outcome, Ticket};
use crate::posts::{Post, PostId};
use crate::ui::editor::PostForm;
use crate::ui::mvi::UiState;

/// Which overlay is open. Creating and editing exclude each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Creating {
        form: PostForm,
    },
    Editing {
        post: Post,
        form: PostForm,
    },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn form(&self) -> Option<&PostForm> {
        match self {
            Modal::Closed => None,
            Modal::Creating { form } | Modal::Editing { form, .. } => Some(form),
        }
    }

    pub(crate) fn form_mut(&mut self) -> Option<&mut PostForm> {
        match self {
            Modal::Closed => None,
            Modal::Creating { form } | Modal::Editing { form, .. } => Some(form),
        }
    }

    /// The post being edited, if any.
    pub fn editing(&self) -> Option<&Post> {
        match self {
            Modal::Editing { post, .. } => Some(post),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    /// Backend order for listed posts; created posts are prepended.
    pub posts: Vec<Post>,
    /// Requests started and not yet completed.
    pub in_flight: usize,
    /// Message of the most recent failure. One slot shared by all operations.
    pub error: Option<String>,
    pub modal: Modal,
    /// Only the newest list request may replace the collection.
    pub latest_list: Option<Ticket>,
    /// Newest update ticket per post; older update completions are dropped.
    pub latest_updates: HashMap<PostId, Ticket>,
}

impl UiState for PostsState {}

impl PostsState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    /// A completion superseded by a newer request of the same kind.
    pub fn is_stale<E>(&self, ticket: Ticket, outcome: &Outcome<E>) -> bool {
        match outcome {
            Outcome::Listed(_) => self.latest_list != Some(ticket),
            Outcome::Updated { id, .. } => self.latest_updates.get(id) != Some(&ticket),
            Outcome::Created(_) | Outcome::Deleted { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_empty() {
        let state = PostsState::default();
        assert!(!state.is_loading());
        assert!(state.posts().is_empty());
        assert!(state.error().is_none());
        assert_eq!(state.modal, Modal::Closed);
    }

    #[test]
    fn modal_exposes_form_only_when_open() {
        assert!(Modal::Closed.form().is_none());
        let post = Post::new(1, "A", "B");
        let modal = Modal::Editing {
            form: PostForm::for_post(&post),
            post: post.clone(),
        };
        assert!(modal.is_open());
        assert_eq!(modal.editing(), Some(&post));
        assert_eq!(modal.form().map(|f| f.author.as_str()), Some("A"));
    }

    #[test]
    fn list_completion_is_stale_unless_latest() {
        let state = PostsState {
            latest_list: Some(Ticket::new(2)),
            ..PostsState::default()
        };
        let outcome: Outcome<String> = Outcome::Listed(Ok(Vec::new()));
        assert!(state.is_stale(Ticket::new(1), &outcome));
        assert!(!state.is_stale(Ticket::new(2), &outcome));
    }
}
