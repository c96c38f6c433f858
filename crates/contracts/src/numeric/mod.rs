//! Numeric text input model

mod parse;
mod text;

pub use parse::{format_number, parse_leading_float, parse_number};
pub use text::NumericText;
