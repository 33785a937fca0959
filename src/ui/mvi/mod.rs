//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable UI state (the post collection, the editor form)
//! changes only through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── keys, ───────────┘
//!               completions
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
