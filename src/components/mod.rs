//! UI components built with Leptos.
//!
//! - [`projects`] - Project listing grid

pub mod projects;

pub use projects::{ListingHandle, ProjectCard, ProjectGrid, render_projects};
