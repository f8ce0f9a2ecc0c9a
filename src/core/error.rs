//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ValidationError`] - A sign-up field failed its rule
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`NavigationError`] - In-page navigation could not swap the content
//! - [`CatalogError`] - The bundled project catalog is malformed
//! - [`AppError`] - Boot-time failures

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::limits::{MAX_AGE, MIN_AGE};

/// Field validation failures.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name must be at least 5 characters and include a surname.")]
    NameIncomplete,
    #[error("Phone must be a valid number with area code (10 or 11 digits, numeric only).")]
    PhoneInvalid,
    #[error("Age must be a valid positive integer.")]
    AgeInvalid,
    #[error("You must be {} or older to register as a volunteer.", MIN_AGE)]
    AgeUnderMinimum,
    #[error("Maximum allowed age is {}.", MAX_AGE)]
    AgeOverMaximum,
    #[error("Select an availability option.")]
    AvailabilityMissing,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Reasons an in-page navigation could not complete.
///
/// Every variant is recovered the same way: a full page load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to parse page markup: {0}")]
    Parse(String),
    #[error("page has no <main> region")]
    MissingMain,
    #[error("DOM update failed: {0}")]
    Dom(String),
}

/// The bundled project catalog could not be read.
#[derive(Debug, Error)]
#[error("invalid project catalog: {0}")]
pub struct CatalogError(#[from] pub toml::de::Error);

/// Errors raised while booting the page script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Document not available")]
    NoDocument,
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Render a thrown JS value as text for error payloads.
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Dom(js_error_text(&value))
    }
}
