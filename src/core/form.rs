//! Sign-up form controller.
//!
//! Runs the field validators on submit and on blur, keeps the current
//! per-field errors, and projects them onto a [`FormSurface`]. The browser
//! surface lives in [`crate::surface::DomForm`]; tests drive the same
//! controller through an in-memory surface.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use leptos::logging::log;

use crate::config::SUCCESS_NOTICE_MS;
use crate::core::validation::{Field, FieldErrors, FormValues, ValidationResult};
use crate::models::Registration;

/// Events a form surface forwards to its controller.
pub trait FormEvents {
    /// The form was submitted. The surface has already suppressed the default action.
    fn on_submit(&self);
    /// A field lost focus.
    fn on_blur(&self, field: Field);
}

/// The parts of a form the controller reads and writes.
pub trait FormSurface {
    /// Current raw value of a field.
    fn value(&self, field: Field) -> String;
    /// Show `message` in the field's single error indicator.
    fn display_error(&self, field: Field, message: &str);
    /// Remove the field's error marking and indicator.
    fn clear_error(&self, field: Field);
    /// Empty every control.
    fn reset(&self);
    /// Show the success notice and hide it again after `visible_for`.
    fn flash_notice(&self, visible_for: Duration);
    /// Register submit and blur listeners that forward to `events`.
    fn listen(&self, events: Weak<dyn FormEvents>);
}

/// Receives accepted registrations.
pub trait RegistrationSink {
    fn deliver(&self, registration: &Registration);
}

/// Default sink: log the payload to the console.
pub struct ConsoleSink;

impl RegistrationSink for ConsoleSink {
    fn deliver(&self, registration: &Registration) {
        match serde_json::to_string(registration) {
            Ok(json) => log!("Registration accepted: {json}"),
            Err(_) => log!("Registration accepted: {registration:?}"),
        }
    }
}

/// Where the controller is in a submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Success,
}

/// Result of handling one submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Registration),
    Rejected(FieldErrors),
}

/// Controller for a single form instance.
///
/// Construct one per form element. [`FormController::setup`] wires the
/// surface's listeners exactly once, however often it is called.
pub struct FormController<S: FormSurface> {
    surface: S,
    sink: Box<dyn RegistrationSink>,
    errors: RefCell<FieldErrors>,
    phase: Cell<FormPhase>,
    wired: Cell<bool>,
}

impl<S: FormSurface + 'static> FormController<S> {
    pub fn new(surface: S, sink: Box<dyn RegistrationSink>) -> Rc<Self> {
        Rc::new(Self {
            surface,
            sink,
            errors: RefCell::new(FieldErrors::new()),
            phase: Cell::new(FormPhase::Idle),
            wired: Cell::new(false),
        })
    }

    /// Attach submit and blur handling.
    ///
    /// Returns `false` when the form was already wired and nothing changed.
    pub fn setup(self: &Rc<Self>) -> bool {
        if self.wired.replace(true) {
            return false;
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let events: Weak<dyn FormEvents> = weak;
        self.surface.listen(events);
        true
    }

    pub fn is_wired(&self) -> bool {
        self.wired.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    /// Errors currently shown on the form.
    pub fn errors(&self) -> FieldErrors {
        self.errors.borrow().clone()
    }

    fn read_values(&self) -> FormValues {
        FormValues {
            name: self.surface.value(Field::Name),
            phone: self.surface.value(Field::Phone),
            age: self.surface.value(Field::Age),
            availability: self.surface.value(Field::Availability),
        }
    }

    /// Clear a field's indicator, then show its error if it has one.
    fn project(&self, field: Field) {
        self.surface.clear_error(field);
        if let Some(err) = self.errors.borrow().get(&field) {
            self.surface.display_error(field, &err.to_string());
        }
    }

    /// Validate every field and either accept or reject the submission.
    pub fn submit(&self) -> SubmitOutcome {
        self.phase.set(FormPhase::Validating);

        let ValidationResult {
            errors,
            registration,
        } = self.read_values().validate();
        *self.errors.borrow_mut() = errors;
        for field in Field::ALL {
            self.project(field);
        }

        match registration {
            Some(registration) => {
                self.sink.deliver(&registration);
                self.surface.reset();
                self.surface
                    .flash_notice(Duration::from_millis(u64::from(SUCCESS_NOTICE_MS)));
                self.phase.set(FormPhase::Success);
                SubmitOutcome::Accepted(registration)
            }
            None => {
                self.phase.set(FormPhase::Idle);
                SubmitOutcome::Rejected(self.errors())
            }
        }
    }

    /// Revalidate one field after it loses focus.
    pub fn blur(&self, field: Field) {
        let value = self.surface.value(field);
        {
            let mut errors = self.errors.borrow_mut();
            match field.check(&value) {
                Ok(()) => errors.remove(&field),
                Err(err) => errors.insert(field, err),
            };
        }
        self.project(field);
    }
}

impl<S: FormSurface + 'static> FormEvents for FormController<S> {
    fn on_submit(&self) {
        self.submit();
    }

    fn on_blur(&self, field: Field) {
        self.blur(field);
    }
}

// ============================================================================
// In-memory surface
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::BTreeMap;

    /// Form surface backed by plain maps, with a manual clock for the notice.
    #[derive(Default)]
    pub struct MemoryForm {
        pub values: RefCell<BTreeMap<Field, String>>,
        /// Displayed indicators per field, with the latest message.
        pub indicators: RefCell<BTreeMap<Field, (usize, String)>>,
        pub listeners: RefCell<Vec<Weak<dyn FormEvents>>>,
        pub resets: Cell<usize>,
        pub notice_visible: Cell<bool>,
        pub notice_flashes: Cell<usize>,
        notice_remaining: Cell<Option<Duration>>,
    }

    impl MemoryForm {
        pub fn filled(values: &[(Field, &str)]) -> Self {
            let form = Self::default();
            for (field, value) in values {
                form.set(*field, value);
            }
            form
        }

        pub fn set(&self, field: Field, value: &str) {
            self.values.borrow_mut().insert(field, value.to_string());
        }

        pub fn indicator(&self, field: Field) -> Option<String> {
            self.indicators
                .borrow()
                .get(&field)
                .map(|(_, message)| message.clone())
        }

        pub fn indicator_count(&self, field: Field) -> usize {
            self.indicators
                .borrow()
                .get(&field)
                .map_or(0, |(count, _)| *count)
        }

        /// Fire a submit event through every registered listener.
        pub fn dispatch_submit(&self) {
            let listeners = self.listeners.borrow().clone();
            for listener in listeners.iter().filter_map(Weak::upgrade) {
                listener.on_submit();
            }
        }

        pub fn dispatch_blur(&self, field: Field) {
            let listeners = self.listeners.borrow().clone();
            for listener in listeners.iter().filter_map(Weak::upgrade) {
                listener.on_blur(field);
            }
        }

        /// Move the clock forward, firing the notice timer when due.
        pub fn advance(&self, elapsed: Duration) {
            if let Some(remaining) = self.notice_remaining.get() {
                if elapsed >= remaining {
                    self.notice_remaining.set(None);
                    self.notice_visible.set(false);
                } else {
                    self.notice_remaining.set(Some(remaining - elapsed));
                }
            }
        }
    }

    impl FormSurface for MemoryForm {
        fn value(&self, field: Field) -> String {
            self.values
                .borrow()
                .get(&field)
                .cloned()
                .unwrap_or_default()
        }

        fn display_error(&self, field: Field, message: &str) {
            let mut indicators = self.indicators.borrow_mut();
            // Counts displays since the last clear, so a projection that
            // skips the clear shows up as a duplicate indicator.
            let entry = indicators.entry(field).or_insert((0, String::new()));
            entry.0 += 1;
            entry.1 = message.to_string();
        }

        fn clear_error(&self, field: Field) {
            self.indicators.borrow_mut().remove(&field);
        }

        fn reset(&self) {
            self.values.borrow_mut().clear();
            self.resets.set(self.resets.get() + 1);
        }

        fn flash_notice(&self, visible_for: Duration) {
            self.notice_visible.set(true);
            self.notice_flashes.set(self.notice_flashes.get() + 1);
            self.notice_remaining.set(Some(visible_for));
        }

        fn listen(&self, events: Weak<dyn FormEvents>) {
            self.listeners.borrow_mut().push(events);
        }
    }

    /// Sink that keeps every delivered registration.
    #[derive(Default, Clone)]
    pub struct RecordingSink(pub Rc<RefCell<Vec<Registration>>>);

    impl RegistrationSink for RecordingSink {
        fn deliver(&self, registration: &Registration) {
            self.0.borrow_mut().push(registration.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{MemoryForm, RecordingSink};
    use super::*;
    use crate::core::error::ValidationError;

    fn valid_form() -> MemoryForm {
        MemoryForm::filled(&[
            (Field::Name, "Maria Silva"),
            (Field::Phone, "11933334444"),
            (Field::Age, "34"),
            (Field::Availability, "weekends"),
        ])
    }

    fn controller(form: MemoryForm) -> (Rc<FormController<MemoryForm>>, RecordingSink) {
        let sink = RecordingSink::default();
        let controller = FormController::new(form, Box::new(sink.clone()));
        controller.setup();
        (controller, sink)
    }

    #[test]
    fn test_valid_submit_resets_and_flashes_notice() {
        let (controller, sink) = controller(valid_form());
        let form = controller.surface();

        form.dispatch_submit();

        assert_eq!(controller.phase(), FormPhase::Success);
        assert_eq!(sink.0.borrow().len(), 1);
        assert_eq!(sink.0.borrow()[0].age, 34);
        assert_eq!(form.resets.get(), 1);
        assert_eq!(form.value(Field::Name), "");
        assert!(form.notice_visible.get());

        form.advance(Duration::from_millis(4999));
        assert!(form.notice_visible.get());
        form.advance(Duration::from_millis(1));
        assert!(!form.notice_visible.get());
    }

    #[test]
    fn test_single_invalid_field_blocks_submission() {
        let form = valid_form();
        form.set(Field::Phone, "12-3456");
        let (controller, sink) = controller(form);
        let form = controller.surface();

        let outcome = controller.submit();

        let expected = FieldErrors::from([(Field::Phone, ValidationError::PhoneInvalid)]);
        assert_eq!(outcome, SubmitOutcome::Rejected(expected));
        assert_eq!(controller.phase(), FormPhase::Idle);
        assert_eq!(
            form.indicator(Field::Phone).as_deref(),
            Some("Phone must be a valid number with area code (10 or 11 digits, numeric only).")
        );
        for field in [Field::Name, Field::Age, Field::Availability] {
            assert_eq!(form.indicator(field), None);
        }
        assert!(sink.0.borrow().is_empty());
        assert_eq!(form.resets.get(), 0);
        assert!(!form.notice_visible.get());
    }

    #[test]
    fn test_resubmit_after_correction_clears_errors() {
        let form = valid_form();
        form.set(Field::Age, "16");
        let (controller, _sink) = controller(form);
        let form = controller.surface();

        form.dispatch_submit();
        assert!(form.indicator(Field::Age).is_some());

        form.set(Field::Age, "18");
        form.dispatch_submit();
        assert_eq!(form.indicator(Field::Age), None);
        assert_eq!(controller.phase(), FormPhase::Success);
    }

    #[test]
    fn test_setup_twice_runs_one_pass_per_submit() {
        let (controller, sink) = controller(valid_form());
        assert!(!controller.setup());
        assert!(controller.is_wired());

        let form = controller.surface();
        assert_eq!(form.listeners.borrow().len(), 1);

        form.dispatch_submit();
        assert_eq!(sink.0.borrow().len(), 1);
        assert_eq!(form.notice_flashes.get(), 1);
        assert_eq!(form.resets.get(), 1);
    }

    #[test]
    fn test_repeated_invalid_submits_keep_one_indicator() {
        let form = valid_form();
        form.set(Field::Name, "Ana");
        let (controller, _sink) = controller(form);
        let form = controller.surface();

        form.dispatch_submit();
        form.dispatch_submit();
        form.dispatch_blur(Field::Name);

        assert_eq!(form.indicator_count(Field::Name), 1);
    }

    #[test]
    fn test_blur_shows_and_hides_single_field_error() {
        let (controller, _sink) = controller(MemoryForm::default());
        let form = controller.surface();

        form.set(Field::Age, "90");
        form.dispatch_blur(Field::Age);
        assert_eq!(
            form.indicator(Field::Age).as_deref(),
            Some("Maximum allowed age is 80.")
        );
        // Other fields are untouched by a blur
        assert_eq!(form.indicator(Field::Name), None);

        form.set(Field::Age, "40");
        form.dispatch_blur(Field::Age);
        assert_eq!(form.indicator(Field::Age), None);
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_dropped_controller_ignores_events() {
        let sink = RecordingSink::default();
        let form = Rc::new(valid_form());
        {
            let controller = FormController::new(SharedForm(form.clone()), Box::new(sink.clone()));
            controller.setup();
        }
        form.dispatch_submit();
        assert!(sink.0.borrow().is_empty());
    }

    /// Lets a test keep the surface after the controller is gone.
    struct SharedForm(Rc<MemoryForm>);

    impl FormSurface for SharedForm {
        fn value(&self, field: Field) -> String {
            self.0.value(field)
        }
        fn display_error(&self, field: Field, message: &str) {
            self.0.display_error(field, message)
        }
        fn clear_error(&self, field: Field) {
            self.0.clear_error(field)
        }
        fn reset(&self) {
            self.0.reset()
        }
        fn flash_notice(&self, visible_for: Duration) {
            self.0.flash_notice(visible_for)
        }
        fn listen(&self, events: Weak<dyn FormEvents>) {
            self.0.listen(events)
        }
    }
}
