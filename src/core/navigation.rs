//! In-page navigation.
//!
//! Loads another page's `<main>` region into the current document instead of
//! doing a full reload. Any failure degrades to a regular browser navigation.
//!
//! # Overlapping requests
//!
//! The latest request wins. Every load takes a generation ticket; a fetch
//! that resolves after a newer load has started is discarded.

use std::cell::{Cell, RefCell};

use leptos::logging::{log, warn};

use crate::core::error::{FetchError, NavigationError};
use crate::models::{Page, file_name, is_current};

/// Browser capabilities the navigator needs.
#[allow(async_fn_in_trait)]
pub trait NavSurface {
    /// Pathname of the current location.
    fn current_path(&self) -> String;
    /// Fetch a page's markup as text.
    async fn fetch_page(&self, path: &str) -> Result<String, FetchError>;
    /// Parse page markup and return the inner markup of its main region.
    fn extract_main(&self, html: &str) -> Result<String, NavigationError>;
    /// Replace the document's main region with `markup`.
    fn swap_main(&self, markup: &str) -> Result<(), NavigationError>;
    /// Push a history entry for `path` without reloading.
    fn push_history(&self, path: &str);
    /// Mark exactly the navigation link for `path` as active.
    fn set_active_link(&self, path: &str);
    /// Let the browser load `path` normally.
    fn full_navigation(&self, path: &str);
}

/// How a load records itself in history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// A new entry (link clicks)
    Push,
    /// Leave history alone (back/forward restore)
    Keep,
}

/// What happened to a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The main region now shows the target page.
    Swapped(Page),
    /// The target is already displayed.
    AlreadyCurrent,
    /// A newer navigation started before this one finished.
    Superseded,
    /// The swap failed and the browser was sent to the page directly.
    FellBack(NavigationError),
}

/// Controller for in-page navigation.
pub struct Navigator<S: NavSurface> {
    surface: S,
    on_page_ready: Box<dyn Fn(&Page)>,
    active_path: RefCell<Option<String>>,
    generation: Cell<u64>,
}

impl<S: NavSurface> Navigator<S> {
    /// Create a navigator. `on_page_ready` runs after each successful swap
    /// so page-specific setup (form wiring, listing render) can follow.
    pub fn new(surface: S, on_page_ready: impl Fn(&Page) + 'static) -> Self {
        Self {
            surface,
            on_page_ready: Box::new(on_page_ready),
            active_path: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Path of the link currently marked active.
    pub fn active_path(&self) -> Option<String> {
        self.active_path.borrow().clone()
    }

    /// Set the active link from a path and project it onto the links.
    pub fn mark_active(&self, path: &str) {
        *self.active_path.borrow_mut() = Some(path.to_string());
        self.surface.set_active_link(path);
    }

    /// Handle a click on an in-site page link.
    pub async fn navigate(&self, target: &str) -> NavOutcome {
        if is_current(&self.surface.current_path(), target) {
            // Staying put is still the latest choice; drop any pending load.
            self.generation.set(self.generation.get() + 1);
            return NavOutcome::AlreadyCurrent;
        }
        self.load(target, HistoryMode::Push).await
    }

    /// Reload the page at the current location after a history traversal.
    ///
    /// Traversals that stay on the page already shown (fragment changes)
    /// leave the content alone.
    pub async fn restore(&self) -> NavOutcome {
        let path = self.surface.current_path();
        let shown = self
            .active_path
            .borrow()
            .as_deref()
            .is_some_and(|active| file_name(active) == file_name(&path));
        if shown {
            return NavOutcome::AlreadyCurrent;
        }
        self.load(&path, HistoryMode::Keep).await
    }

    async fn load(&self, target: &str, mode: HistoryMode) -> NavOutcome {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);

        let fetched = self.surface.fetch_page(target).await;
        if self.generation.get() != ticket {
            log!("Navigation to {target} superseded");
            return NavOutcome::Superseded;
        }

        match self.apply(target, fetched, mode) {
            Ok(page) => NavOutcome::Swapped(page),
            Err(err) => {
                warn!("Failed to load {target} in place: {err}");
                self.surface.full_navigation(target);
                NavOutcome::FellBack(err)
            }
        }
    }

    fn apply(
        &self,
        target: &str,
        fetched: Result<String, FetchError>,
        mode: HistoryMode,
    ) -> Result<Page, NavigationError> {
        let html = fetched?;
        let markup = self.surface.extract_main(&html)?;
        self.surface.swap_main(&markup)?;
        if mode == HistoryMode::Push {
            self.surface.push_history(target);
        }

        let page = Page::from_path(target);
        (self.on_page_ready)(&page);
        self.mark_active(target);
        Ok(page)
    }
}
