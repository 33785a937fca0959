use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::PostsApi;
use crate::controller::outcome::{execute, Completion};
use crate::controller::request::PendingRequest;

/// Queue depth between the UI thread and the worker.
const REQUEST_QUEUE: usize = 32;

pub type RequestSender = mpsc::Sender<PendingRequest>;

/// Start the request worker on `handle`.
///
/// Each received request runs as its own task, so overlapping operations
/// proceed independently. Completions are handed to `deliver`; once it
/// reports the receiver is gone, later completions are dropped.
pub fn spawn_worker<A, F>(handle: &Handle, api: A, deliver: F) -> RequestSender
where
    A: PostsApi + 'static,
    F: Fn(Completion) -> bool + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::channel::<PendingRequest>(REQUEST_QUEUE);
    let api = Arc::new(api);
    let deliver = Arc::new(deliver);

    handle.spawn(async move {
        while let Some(pending) = rx.recv().await {
            let api = Arc::clone(&api);
            let deliver = Arc::clone(&deliver);
            tokio::spawn(async move {
                let ticket = pending.ticket;
                let completion = execute(api.as_ref(), pending).await;
                if !deliver(completion) {
                    tracing::trace!(%ticket, "completion dropped (receiver gone)");
                }
            });
        }
        tracing::debug!("request worker stopped");
    });

    tx
}
