use crate::api::ApiError;
use crate::controller::{Completion, PendingRequest, PostsController, Request, RequestSender};
use crate::posts::Post;
use crate::ui::editor::FormIntent;
use crate::ui::post_item::PostAction;
use crate::ui::posts::PostsState;
use crate::ui::spinner::Spinner;
use tokio::sync::mpsc::error::TrySendError;

pub struct App {
    should_quit: bool,
    controller: PostsController,
    requests: Option<RequestSender>,
    endpoint: String,
    selection: usize,
    spinner: Spinner,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            controller: PostsController::new(),
            requests: None,
            endpoint: endpoint.into(),
            selection: 0,
            spinner: Spinner::default(),
        }
    }

    pub fn set_request_sender(&mut self, sender: RequestSender) {
        self.requests = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &PostsState {
        self.controller.state()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn form_open(&self) -> bool {
        self.state().modal.is_open()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.state().posts().get(self.selection)
    }

    /// The list is drawn only when nothing is loading and no error is shown.
    pub fn list_visible(&self) -> bool {
        let state = self.state();
        !state.is_loading() && state.error().is_none()
    }

    pub fn move_selection(&mut self, direction: i32) {
        if !self.list_visible() {
            return;
        }
        let len = self.state().posts().len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn on_tick(&mut self) {
        if self.state().is_loading() {
            self.spinner.advance();
        }
    }

    /// Fetch the whole collection. Sent once at startup and on reload.
    pub fn request_list(&mut self) {
        let pending = self.controller.begin(Request::List);
        self.send(pending);
    }

    pub fn open_create(&mut self) {
        self.controller.open_create();
    }

    pub fn close_modal(&mut self) {
        self.controller.close_modal();
    }

    pub fn edit_form(&mut self, intent: FormIntent) {
        self.controller.edit_form(intent);
    }

    pub fn submit_form(&mut self) {
        if let Some(pending) = self.controller.submit() {
            self.send(pending);
        }
    }

    /// Run a post action against the selected post.
    pub fn activate(&mut self, action: PostAction) {
        if !self.list_visible() {
            return;
        }
        let Some(post) = self.selected_post().cloned() else {
            return;
        };
        match action {
            PostAction::Edit => self.controller.start_edit(post),
            PostAction::Delete => {
                let pending = self.controller.begin(Request::Delete(post.id));
                self.send(pending);
            }
        }
    }

    pub fn on_completion(&mut self, completion: Completion) {
        if let Err(err) = self.controller.complete(completion) {
            tracing::warn!(error = %err, "operation failed");
        }
        self.clamp_selection();
    }

    fn send(&mut self, pending: PendingRequest) {
        let Some(sender) = &self.requests else {
            self.on_completion(pending.fail(ApiError::Dispatch(
                "request worker not running".to_string(),
            )));
            return;
        };

        if let Err(err) = sender.try_send(pending) {
            let reason = err.to_string();
            let pending = match err {
                TrySendError::Full(pending) | TrySendError::Closed(pending) => pending,
            };
            self.on_completion(pending.fail(ApiError::Dispatch(reason)));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.state().posts().len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
