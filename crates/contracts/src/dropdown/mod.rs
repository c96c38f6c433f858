//! Dropdown model: options and the open/closed menu state

mod option;
mod state;

pub use option::{DropdownOption, Extra, OptionId};
pub use state::{button_label, MenuState};
