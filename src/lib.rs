//! Terminal client for a posts REST service.
//!
//! The [`controller`] keeps a local copy of the post collection in sync with
//! the backend: it lists once, then applies create, update and delete
//! results only after the backend confirms them. The [`ui`] module puts a
//! ratatui front end on top; [`cli`] drives the same controller headlessly.

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod posts;
pub mod ui;
