//! Sign-up form bound to live DOM elements.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use super::presenter;
use crate::config::selectors;
use crate::core::error::{AppError, js_error_text};
use crate::core::{Field, FormEvents, FormSurface};
use crate::utils::dom;

/// A `<form>` and the controls the validators read.
///
/// Element references are resolved once when binding. Listeners registered
/// through [`FormSurface::listen`] live as long as this value.
pub struct DomForm {
    form: HtmlFormElement,
    fields: Vec<(Field, Element)>,
    notice: Option<Element>,
    listeners: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
}

impl DomForm {
    /// Resolve the form's controls by their `name` attribute.
    pub fn bind(document: &Document, form: Element) -> Result<Self, AppError> {
        let form = form
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| AppError::MissingElement(selectors::FORM))?;

        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                form.query_selector(&format!("[name=\"{}\"]", field.name()))
                    .ok()
                    .flatten()
                    .map(|element| (field, element))
                    .ok_or(AppError::MissingElement(field.name()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            form,
            fields,
            notice: dom::query(document, selectors::SUCCESS_NOTICE),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Check whether this surface wraps `element`.
    pub fn is_bound_to(&self, element: &Element) -> bool {
        self.form.is_same_node(Some(element))
    }

    fn element(&self, field: Field) -> Option<&Element> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, element)| element)
    }

    fn add_listener(&self, target: &Element, event: &str, closure: Closure<dyn FnMut(Event)>) {
        if let Err(err) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            warn!("Failed to attach {event} listener: {}", js_error_text(&err));
            return;
        }
        self.listeners.borrow_mut().push(closure);
    }
}

impl FormSurface for DomForm {
    fn value(&self, field: Field) -> String {
        let Some(element) = self.element(field) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn display_error(&self, field: Field, message: &str) {
        if let Some(element) = self.element(field)
            && let Err(err) = presenter::display_error(element, message)
        {
            warn!("Failed to show error for {}: {}", field.name(), js_error_text(&err));
        }
    }

    fn clear_error(&self, field: Field) {
        if let Some(element) = self.element(field)
            && let Err(err) = presenter::clear_error(element)
        {
            warn!("Failed to clear error for {}: {}", field.name(), js_error_text(&err));
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn flash_notice(&self, visible_for: Duration) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        dom::set_display(&notice, "block");
        let millis = u32::try_from(visible_for.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || dom::set_display(&notice, "none")).forget();
    }

    fn listen(&self, events: Weak<dyn FormEvents>) {
        let submit_events = events.clone();
        let on_submit = Closure::wrap(Box::new(move |ev: Event| {
            ev.prevent_default();
            if let Some(events) = submit_events.upgrade() {
                events.on_submit();
            }
        }) as Box<dyn FnMut(Event)>);
        self.add_listener(&self.form, "submit", on_submit);

        for (field, element) in &self.fields {
            let field = *field;
            let blur_events = events.clone();
            let on_blur = Closure::wrap(Box::new(move |_: Event| {
                if let Some(events) = blur_events.upgrade() {
                    events.on_blur(field);
                }
            }) as Box<dyn FnMut(Event)>);
            self.add_listener(element, "blur", on_blur);
        }
    }
}
