//! Browser implementations of the controller surfaces.
//!
//! - [`presenter`] - Inline error indicators next to form fields
//! - [`DomForm`] - [`FormSurface`](crate::core::FormSurface) over a live `<form>`
//! - [`DomNav`] - [`NavSurface`](crate::core::NavSurface) over the document

mod form;
mod nav;
pub mod presenter;

pub use form::DomForm;
pub use nav::{DomNav, page_link_target};
