//! Bulk Gmail cleanup from an interactive terminal menu.
//!
//! Authentication happens once at startup; every menu action is an
//! independent list-then-act pass over at most one page of matches.

pub mod actions;
pub mod cli;
pub mod gmail_api;
pub mod menu;
pub mod types;
