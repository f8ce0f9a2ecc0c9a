//! Core logic for the page script.
//!
//! This module provides:
//! - [`validation`] field validators and whole-form validation
//! - [`FormController`] submit/blur handling for the sign-up form
//! - [`Navigator`] in-page navigation with full-load fallback

pub mod error;
mod form;
mod navigation;
pub mod validation;

pub use form::{
    ConsoleSink, FormController, FormEvents, FormPhase, FormSurface, RegistrationSink,
    SubmitOutcome,
};
pub use navigation::{HistoryMode, NavOutcome, NavSurface, Navigator};
pub use validation::{Field, FieldErrors, FormValues, ValidationResult};
