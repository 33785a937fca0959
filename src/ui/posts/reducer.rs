use crate::controller::{Outcome, RequestKind};
use crate::posts::PostId;
use crate::ui::editor::{FormReducer, PostForm};
use crate::ui::mvi::Reducer;
use crate::ui::posts::intent::PostsIntent;
use crate::ui::posts::state::{Modal, PostsState};

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::OpenCreate => {
                state.modal = Modal::Creating {
                    form: PostForm::blank(),
                };
            }
            PostsIntent::StartEdit { post } => {
                state.modal = Modal::Editing {
                    form: PostForm::for_post(&post),
                    post,
                };
            }
            PostsIntent::CloseModal => state.modal = Modal::Closed,
            PostsIntent::Form(form_intent) => {
                if let Some(form) = state.modal.form_mut() {
                    *form = FormReducer::reduce(std::mem::take(form), form_intent);
                }
            }
            PostsIntent::Started { ticket, request } => {
                state.in_flight += 1;
                match request {
                    RequestKind::List => {
                        // Only a list fetch clears a previous error.
                        state.error = None;
                        state.latest_list = Some(ticket);
                    }
                    RequestKind::Update { id } => {
                        state.latest_updates.insert(id, ticket);
                    }
                    RequestKind::Create | RequestKind::Delete { .. } => {}
                }
            }
            PostsIntent::Completed { ticket, outcome } => {
                state.in_flight = state.in_flight.saturating_sub(1);
                if state.is_stale(ticket, &outcome) {
                    return state;
                }
                apply(&mut state, outcome);
            }
        }
        state
    }
}

fn apply(state: &mut PostsState, outcome: Outcome<String>) {
    match outcome {
        Outcome::Listed(Ok(posts)) => state.posts = posts,
        Outcome::Created(Ok(post)) => {
            // A reload may already have delivered it.
            state.posts.retain(|existing| existing.id != post.id);
            state.posts.insert(0, post);
        }
        Outcome::Updated { id, result } => {
            state.latest_updates.remove(&id);
            match result {
                Ok(updated) => {
                    for post in state.posts.iter_mut().filter(|post| post.id == id) {
                        *post = updated.clone();
                    }
                    close_editor_for(state, &id);
                }
                Err(message) => state.error = Some(message),
            }
        }
        Outcome::Deleted { id, result: Ok(()) } => {
            state.posts.retain(|post| post.id != id);
            close_editor_for(state, &id);
        }
        Outcome::Listed(Err(message))
        | Outcome::Created(Err(message))
        | Outcome::Deleted {
            result: Err(message),
            ..
        } => state.error = Some(message),
    }
}

fn close_editor_for(state: &mut PostsState, id: &PostId) {
    if state.modal.editing().is_some_and(|post| &post.id == id) {
        state.modal = Modal::Closed;
    }
}
