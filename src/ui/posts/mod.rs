//! Collection state: the list of posts mirrored from the backend, plus the
//! loading, error and modal state shown around it.

mod intent;
mod reducer;
mod state;

pub use intent::PostsIntent;
pub use reducer::PostsReducer;
pub use state::{Modal, PostsState};
