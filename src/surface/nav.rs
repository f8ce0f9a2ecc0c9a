//! Navigation surface over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, DomParser, Element, SupportedType};

use crate::config::{classes, selectors};
use crate::core::NavSurface;
use crate::core::error::{AppError, FetchError, NavigationError, js_error_text};
use crate::models::file_name;
use crate::utils::{dom, fetch_text};

/// The document's main region and navigation links.
pub struct DomNav {
    main: Element,
    links: Vec<Element>,
}

impl DomNav {
    /// Resolve the main region and navigation links once.
    pub fn from_document(document: &Document) -> Result<Self, AppError> {
        let main =
            dom::query(document, selectors::MAIN).ok_or(AppError::MissingElement(selectors::MAIN))?;
        Ok(Self {
            main,
            links: dom::query_all(document, selectors::NAV_LINKS),
        })
    }
}

impl NavSurface for DomNav {
    fn current_path(&self) -> String {
        dom::pathname()
    }

    async fn fetch_page(&self, path: &str) -> Result<String, FetchError> {
        fetch_text(path).await
    }

    fn extract_main(&self, html: &str) -> Result<String, NavigationError> {
        let parser = DomParser::new().map_err(|e| NavigationError::Parse(js_error_text(&e)))?;
        let document = parser
            .parse_from_string(html, SupportedType::TextHtml)
            .map_err(|e| NavigationError::Parse(js_error_text(&e)))?;
        document
            .query_selector(selectors::MAIN)
            .ok()
            .flatten()
            .map(|main| main.inner_html())
            .ok_or(NavigationError::MissingMain)
    }

    fn swap_main(&self, markup: &str) -> Result<(), NavigationError> {
        if !self.main.is_connected() {
            return Err(NavigationError::Dom("main region is detached".to_string()));
        }
        self.main.set_inner_html(markup);
        Ok(())
    }

    fn push_history(&self, path: &str) {
        dom::push_path(path);
    }

    fn set_active_link(&self, path: &str) {
        let target = file_name(path);
        for link in &self.links {
            let active = link
                .get_attribute("href")
                .is_some_and(|href| file_name(&href) == target);
            let _ = link.class_list().toggle_with_force(classes::ACTIVE, active);
        }
    }

    fn full_navigation(&self, path: &str) {
        dom::assign_location(path);
    }
}

/// Resolve the anchor a click should navigate in-page, if any.
///
/// Modified clicks, non-primary buttons, and links opening another browsing
/// context are left to the browser.
pub fn page_link_target(ev: &web_sys::MouseEvent) -> Option<String> {
    if ev.default_prevented()
        || ev.button() != 0
        || ev.ctrl_key()
        || ev.meta_key()
        || ev.shift_key()
        || ev.alt_key()
    {
        return None;
    }
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a").ok()??;
    if let Some(context) = anchor.get_attribute("target")
        && !context.is_empty()
        && context != "_self"
    {
        return None;
    }
    let href = anchor.get_attribute("href")?;
    crate::models::is_page_link(&href).then_some(href)
}
