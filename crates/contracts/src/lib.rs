//! DOM-free model behind the widgets: number parsing, the numeric text
//! buffer, dropdown options and the dropdown open/closed state machine.

pub mod dropdown;
pub mod numeric;
