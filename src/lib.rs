//! Actor Showcase terminal client
//!
//! Fetches actor records from the Actor Showcase API and renders them as
//! cards, either in an interactive TUI or as plain text.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod showcase_tui;
