use crate::api::PostsApi;
use crate::controller::outcome::execute;
use crate::controller::request::Request;
use crate::controller::{ControllerError, PostsController};
use crate::posts::{Post, PostDraft, PostId};
use crate::ui::posts::PostsState;

/// Controller bound to a backend, running one request at a time.
pub struct Session<A> {
    api: A,
    controller: PostsController,
}

impl<A: PostsApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            controller: PostsController::new(),
        }
    }

    pub fn state(&self) -> &PostsState {
        self.controller.state()
    }

    pub fn controller_mut(&mut self) -> &mut PostsController {
        &mut self.controller
    }

    /// Replace the local collection with the backend's.
    pub async fn list(&mut self) -> Result<(), ControllerError> {
        self.run(Request::List).await
    }

    /// Create a post; it is prepended once the backend assigns its id.
    pub async fn create(&mut self, draft: PostDraft) -> Result<(), ControllerError> {
        self.run(Request::Create(draft)).await
    }

    /// Replace a post by id and clear the edit form for it.
    pub async fn save_edit(&mut self, post: Post) -> Result<(), ControllerError> {
        self.run(Request::Update(post)).await
    }

    pub async fn delete(&mut self, id: PostId) -> Result<(), ControllerError> {
        self.run(Request::Delete(id)).await
    }

    /// Submit the open form, if any.
    pub async fn submit(&mut self) -> Option<Result<(), ControllerError>> {
        let pending = self.controller.submit()?;
        let completion = execute(&self.api, pending).await;
        Some(self.controller.complete(completion))
    }

    async fn run(&mut self, request: Request) -> Result<(), ControllerError> {
        let pending = self.controller.begin(request);
        let completion = execute(&self.api, pending).await;
        self.controller.complete(completion)
    }
}
