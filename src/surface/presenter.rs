//! Inline field error indicators.
//!
//! A field's indicator is the element right after it carrying the
//! `error-message` class. There is never more than one per field: display
//! reuses an existing indicator and clear removes it.

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::classes::{ERROR_MESSAGE, INPUT_ERROR};

/// The field's current indicator, if any.
pub fn error_indicator(field: &Element) -> Option<Element> {
    field
        .next_element_sibling()
        .filter(|sibling| sibling.class_list().contains(ERROR_MESSAGE))
}

/// Show `message` right after `field` and mark the field as errored.
pub fn display_error(field: &Element, message: &str) -> Result<(), JsValue> {
    let indicator = match error_indicator(field) {
        Some(existing) => existing,
        None => {
            let document = field
                .owner_document()
                .ok_or_else(|| JsValue::from_str("field has no owner document"))?;
            let indicator = document.create_element("div")?;
            indicator.class_list().add_1(ERROR_MESSAGE)?;
            field.after_with_node_1(&indicator)?;
            indicator
        }
    };
    indicator.set_text_content(Some(message));
    field.class_list().add_1(INPUT_ERROR)
}

/// Remove the field's error marking and its indicator.
pub fn clear_error(field: &Element) -> Result<(), JsValue> {
    field.class_list().remove_1(INPUT_ERROR)?;
    if let Some(indicator) = error_indicator(field) {
        indicator.remove();
    }
    Ok(())
}
