//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Static data assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Catalog of current projects rendered on the listing page.
pub const PROJECTS_TOML: &str = include_str!("../assets/projects.toml");

// =============================================================================
// Pages
// =============================================================================

/// Page file names served by the site.
pub mod pages {
    /// Suffix that marks a link as an in-site page.
    pub const SUFFIX: &str = ".html";
    /// Entry page. Always reloaded, even when already current.
    pub const ENTRY: &str = "index.html";
    /// Project listing page.
    pub const PROJECTS: &str = "projects.html";
    /// Volunteer sign-up page.
    pub const SIGNUP: &str = "signup.html";
}

// =============================================================================
// DOM Selectors
// =============================================================================

/// CSS selectors for the elements the script manipulates.
pub mod selectors {
    /// Main content region, swapped on navigation.
    pub const MAIN: &str = "main";
    /// Navigation links whose active state is tracked.
    pub const NAV_LINKS: &str = "header nav a";
    /// Volunteer sign-up form.
    pub const FORM: &str = "#volunteer-form";
    /// Success notice shown after an accepted submission.
    pub const SUCCESS_NOTICE: &str = "#success-message";
    /// Id (not a selector) of the section that receives the project list.
    pub const PROJECTS_SECTION: &str = "current-projects";
}

/// CSS class names projected onto the DOM.
pub mod classes {
    /// Inline error indicator placed right after a field.
    pub const ERROR_MESSAGE: &str = "error-message";
    /// Marks a field that currently has an error.
    pub const INPUT_ERROR: &str = "input-error";
    /// Marks the navigation link of the current page.
    pub const ACTIVE: &str = "active";
    /// Grid container around the project cards.
    pub const PROJECTS_GRID: &str = "projects-grid";
    /// A single project card.
    pub const PROJECT_CARD: &str = "project-card";
    /// Call-to-action link inside a project card.
    pub const CTA: &str = "cta-volunteer";
}

// =============================================================================
// Listing Text
// =============================================================================

/// Heading above the project grid.
pub const PROJECTS_HEADING: &str = "Current Social Projects";

/// Label of the call-to-action link on every project card.
pub const CTA_LABEL: &str = "I Want to Help!";

// =============================================================================
// Timing
// =============================================================================

/// How long the success notice stays visible, in milliseconds.
pub const SUCCESS_NOTICE_MS: u32 = 5000;

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Validation Limits
// =============================================================================

/// Limits applied by the field validators.
pub mod limits {
    /// Minimum trimmed length of a full name.
    pub const NAME_MIN_CHARS: usize = 5;
    /// Youngest accepted volunteer.
    pub const MIN_AGE: u32 = 18;
    /// Oldest accepted volunteer.
    pub const MAX_AGE: u32 = 80;
}
