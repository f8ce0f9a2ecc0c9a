//! Page enhancement script for the volunteer site.
//!
//! Swaps page content in place when internal links are clicked, renders the
//! project listing, and validates the volunteer sign-up form.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod surface;
pub mod utils;

pub use app::{App, start};
