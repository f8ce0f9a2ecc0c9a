//! Page identification for in-page navigation.
//!
//! Pages are plain `.html` files next to each other, so a page is named by
//! the last segment of its path.

use crate::config::pages;
use crate::utils::dom;

/// A page of the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// Entry page (`index.html` or a directory path)
    Entry,
    /// Project listing
    Projects,
    /// Volunteer sign-up form
    Signup,
    /// Any other page ending in the page suffix
    Other(String),
}

impl Page {
    /// Identify the page a path or href points at.
    pub fn from_path(path: &str) -> Self {
        match file_name(path) {
            pages::ENTRY => Self::Entry,
            pages::PROJECTS => Self::Projects,
            pages::SIGNUP => Self::Signup,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the page for the current browser location.
    pub fn current() -> Self {
        Self::from_path(&dom::pathname())
    }
}

/// Last path segment, without query or fragment.
///
/// A directory path (`/` or `/site/`) resolves to the entry page.
pub fn file_name(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some("") | None => pages::ENTRY,
        Some(name) => name,
    }
}

/// Check whether a navigation to `target` would reload the page already shown.
///
/// The entry page never counts as current so it can always be reloaded.
pub fn is_current(current_path: &str, target: &str) -> bool {
    let target_name = file_name(target);
    target_name != pages::ENTRY && file_name(current_path) == target_name
}

/// Decide whether an anchor's `href` should be loaded in-page.
///
/// Only same-site relative or absolute paths ending in the page suffix
/// qualify. Anything with a scheme, a protocol-relative URL, or a bare
/// fragment is left to the browser.
pub fn is_page_link(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("//") {
        return false;
    }
    let path = href.split(['?', '#']).next().unwrap_or_default();
    if path.contains(':') {
        return false;
    }
    path.ends_with(pages::SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Entry);
        assert_eq!(Page::from_path("/site/index.html"), Page::Entry);
        assert_eq!(Page::from_path("projects.html"), Page::Projects);
        assert_eq!(Page::from_path("/site/signup.html?ref=home"), Page::Signup);
        assert_eq!(
            Page::from_path("/about.html"),
            Page::Other("about.html".to_string())
        );
    }

    #[test]
    fn test_is_current() {
        assert!(is_current("/site/projects.html", "projects.html"));
        assert!(!is_current("/site/projects.html", "signup.html"));
        // Entry page is always reloadable
        assert!(!is_current("/index.html", "index.html"));
        assert!(!is_current("/", "index.html"));
    }

    #[test]
    fn test_is_page_link() {
        assert!(is_page_link("signup.html"));
        assert!(is_page_link("/site/projects.html"));
        assert!(is_page_link("projects.html#top"));

        assert!(!is_page_link(""));
        assert!(!is_page_link("#section"));
        assert!(!is_page_link("https://example.org/page.html"));
        assert!(!is_page_link("//cdn.example.org/page.html"));
        assert!(!is_page_link("mailto:team@example.org"));
        assert!(!is_page_link("/docs/guide.pdf"));
    }
}
