//! Root application module.
//!
//! Wires the navigation controller, the sign-up form controller and the
//! project listing to the live document, following the page the browser is
//! currently showing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::logging::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, MouseEvent};

use crate::components::{ListingHandle, render_projects};
use crate::config::selectors;
use crate::core::error::AppError;
use crate::core::{ConsoleSink, FormController, Navigator};
use crate::models::{ContentItem, Page};
use crate::surface::{DomForm, DomNav, page_link_target};
use crate::utils::dom;

/// Page script state for one document.
///
/// Owns the navigator and the controller of the form currently in the
/// document. A new form element gets a new controller; the same element
/// keeps its wired one.
pub struct App {
    document: Document,
    navigator: Navigator<DomNav>,
    form: RefCell<Option<Rc<FormController<DomForm>>>>,
    projects: Vec<ContentItem>,
    listing: RefCell<Option<ListingHandle>>,
}

impl App {
    /// Bind to the loaded document and run the initial page setup.
    pub fn boot() -> Result<Rc<Self>, AppError> {
        let document = dom::document().ok_or(AppError::NoDocument)?;
        let nav_surface = DomNav::from_document(&document)?;
        let projects = ContentItem::bundled().unwrap_or_else(|err| {
            error!("{err}");
            Vec::new()
        });

        let app = Rc::new_cyclic(|weak: &Weak<App>| {
            let weak = weak.clone();
            let navigator = Navigator::new(nav_surface, move |page: &Page| {
                if let Some(app) = weak.upgrade() {
                    app.page_ready(page);
                }
            });
            App {
                document,
                navigator,
                form: RefCell::new(None),
                projects,
                listing: RefCell::new(None),
            }
        });

        app.mount_form();
        if Page::current() == Page::Projects {
            app.render_projects();
        }
        app.navigator.mark_active(&dom::pathname());

        app.intercept_links()?;
        app.restore_on_popstate()?;
        Ok(app)
    }

    /// Run the setup belonging to a freshly swapped-in page.
    fn page_ready(&self, page: &Page) {
        match page {
            Page::Signup => self.mount_form(),
            Page::Projects => self.render_projects(),
            Page::Entry | Page::Other(_) => {}
        }
    }

    /// Controller of the form currently in the document.
    pub fn form(&self) -> Option<Rc<FormController<DomForm>>> {
        self.form.borrow().clone()
    }

    /// Wire the sign-up form if the document has one.
    pub fn mount_form(&self) {
        let Some(element) = dom::query(&self.document, selectors::FORM) else {
            self.form.replace(None);
            return;
        };

        if let Some(existing) = self.form.borrow().as_ref()
            && existing.surface().is_bound_to(&element)
        {
            existing.setup();
            return;
        }

        match DomForm::bind(&self.document, element) {
            Ok(surface) => {
                let controller = FormController::new(surface, Box::new(ConsoleSink));
                controller.setup();
                self.form.replace(Some(controller));
            }
            Err(err) => {
                error!("Sign-up form unavailable: {err}");
                self.form.replace(None);
            }
        }
    }

    /// Render the listing, unmounting the previous one first.
    pub fn render_projects(&self) {
        drop(self.listing.take());
        self.listing
            .replace(render_projects(&self.document, &self.projects));
    }

    /// Load internal page links in place, via one delegated click listener.
    fn intercept_links(self: &Rc<Self>) -> Result<(), AppError> {
        let app = Rc::clone(self);
        let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
            let Some(href) = page_link_target(&ev) else {
                return;
            };
            ev.prevent_default();
            let app = Rc::clone(&app);
            spawn_local(async move {
                app.navigator.navigate(&href).await;
            });
        }) as Box<dyn FnMut(MouseEvent)>);

        self.document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // Keep the closure alive for the lifetime of the page
        closure.forget();
        Ok(())
    }

    /// Swap content back in when the user moves through history.
    fn restore_on_popstate(self: &Rc<Self>) -> Result<(), AppError> {
        let window = dom::window().ok_or(AppError::NoWindow)?;
        let app = Rc::clone(self);
        let closure = Closure::wrap(Box::new(move |_: Event| {
            let app = Rc::clone(&app);
            spawn_local(async move {
                app.navigator.restore().await;
            });
        }) as Box<dyn FnMut(Event)>);

        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

/// Start the page script, waiting for the DOM if it is still loading.
pub fn start() -> Result<(), AppError> {
    let document = dom::document().ok_or(AppError::NoDocument)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = App::boot() {
                error!("Failed to start page script: {err}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    App::boot().map(|_| ())
}
