use serde::{Deserialize, Serialize};
use std::fmt;

/// Untyped attribute bag used when the caller has no payload type of its own.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Option identifier: either an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionId {
    Int(i64),
    Text(String),
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for OptionId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for OptionId {
    fn from(id: i32) -> Self {
        Self::Int(id.into())
    }
}

impl From<String> for OptionId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// One selectable entry of a dropdown.
///
/// `extra` carries the caller's own attributes and is flattened next to `id`
/// and `name` when (de)serialized, so `{"id": 1, "name": "A", "color": "red"}`
/// maps onto `DropdownOption<Swatch>` for `struct Swatch { color: String }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption<T = Extra> {
    pub id: OptionId,
    pub name: String,
    #[serde(flatten)]
    pub extra: T,
}

impl DropdownOption<Extra> {
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>) -> Self {
        Self::with_extra(id, name, Extra::new())
    }
}

impl<T> DropdownOption<T> {
    pub fn with_extra(id: impl Into<OptionId>, name: impl Into<String>, extra: T) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Swatch {
        color: String,
    }

    #[test]
    fn test_option_id_from_json() {
        let ids: Vec<OptionId> = serde_json::from_value(json!([1, "two", -3])).unwrap();
        assert_eq!(
            ids,
            vec![OptionId::Int(1), OptionId::from("two"), OptionId::Int(-3)]
        );
    }

    #[test]
    fn test_option_id_display() {
        assert_eq!(OptionId::from(42).to_string(), "42");
        assert_eq!(OptionId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_untyped_extra_attributes() {
        let options: Vec<DropdownOption> = serde_json::from_value(json!([
            {"id": 1, "name": "A"},
            {"id": "b", "name": "B", "color": "red", "weight": 3}
        ]))
        .unwrap();

        assert_eq!(options[0], DropdownOption::new(1, "A"));
        assert_eq!(options[1].id, OptionId::from("b"));
        assert_eq!(options[1].extra.get("color"), Some(&json!("red")));
        assert_eq!(options[1].extra.get("weight"), Some(&json!(3)));
    }

    #[test]
    fn test_typed_extra_attributes() {
        let option: DropdownOption<Swatch> =
            serde_json::from_value(json!({"id": 7, "name": "Crimson", "color": "#dc143c"}))
                .unwrap();
        assert_eq!(
            option,
            DropdownOption::with_extra(
                7,
                "Crimson",
                Swatch {
                    color: "#dc143c".to_string()
                }
            )
        );
    }

    #[test]
    fn test_serialize_flattens_extra() {
        let mut option = DropdownOption::new(2, "B");
        option.extra.insert("hint".to_string(), json!("second"));
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({"id": 2, "name": "B", "hint": "second"})
        );
    }
}
