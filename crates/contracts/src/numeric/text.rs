use super::parse::{format_number, parse_leading_float, parse_number};

/// Raw text held by a numeric input.
///
/// The buffer keeps exactly what the user typed, including partial input such
/// as `"-"`, and is never rewritten after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumericText {
    text: String,
}

impl NumericText {
    /// Seeds the buffer with the textual form of `value`.
    pub fn new(value: f64) -> Self {
        Self {
            text: format_number(value),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer with `text` and returns the number to report as a
    /// change, or `None` when the text has no numeric prefix.
    pub fn input(&mut self, text: impl Into<String>) -> Option<f64> {
        self.text = text.into();
        parse_number(&self.text)
    }

    /// Value reported on focus loss. May be NaN.
    pub fn blur_value(&self) -> f64 {
        parse_leading_float(&self.text)
    }
}
