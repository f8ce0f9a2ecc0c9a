//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ContentItem`] - Static project catalog entries
//! - [`Registration`] - Accepted sign-up payload
//! - [`Page`] - Page identification for in-page navigation

mod page;
mod project;
mod registration;

pub use page::{Page, file_name, is_current, is_page_link};
pub use project::ContentItem;
pub use registration::Registration;
