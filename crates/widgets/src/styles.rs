//! Stylesheet bundled with the dropdown

use wasm_bindgen::prelude::wasm_bindgen;

/// Dropdown styles, compiled into the wasm bundle
pub const DROPDOWN_CSS: &str = include_str!("../style/dropdown.css");

const STYLE_ELEMENT_ID: &str = "widgets-dropdown-styles";

/// Appends the dropdown stylesheet to `<head>`; does nothing if already present
#[wasm_bindgen(js_name = injectDropdownStyles)]
pub fn inject_dropdown_styles() {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
                return;
            }
            if let Some(head) = document.head() {
                match document.create_element("style") {
                    Ok(style) => {
                        style.set_id(STYLE_ELEMENT_ID);
                        style.set_text_content(Some(DROPDOWN_CSS));
                        if let Err(err) = head.append_child(&style) {
                            log::error!("Failed to attach dropdown styles: {:?}", err);
                        }
                    }
                    Err(err) => log::error!("Failed to create style element: {:?}", err),
                }
            }
        }
    }
}
