//! Terminal front end: list view, create/edit overlay, loading and error views.

pub mod app;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod post_item;
pub mod posts;
pub mod render;
pub mod runtime;
pub mod spinner;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
