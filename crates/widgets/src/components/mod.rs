mod dropdown;
mod numeric_input;

pub use dropdown::{Dropdown, DEFAULT_PLACEHOLDER};
pub use numeric_input::NumericInput;

/// Joins a component's own class with the caller's extra classes.
pub(crate) fn class_list(base: &str, extra: Option<String>) -> String {
    match extra.as_deref().map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
