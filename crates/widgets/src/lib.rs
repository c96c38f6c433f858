pub mod bindings;
pub mod components;
pub mod styles;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

pub use components::{Dropdown, NumericInput};
pub use contracts::dropdown::{DropdownOption, Extra, OptionId};

use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
