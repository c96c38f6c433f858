use super::option::DropdownOption;

/// Open/closed state of a dropdown menu. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Toggle button activated.
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Toggle button lost focus.
    pub fn blur(self) -> Self {
        Self::Closed
    }

    /// Hands `option` to `on_select`, then closes. The callback always runs to
    /// completion before the closed state is returned.
    pub fn select<O>(self, option: O, on_select: impl FnOnce(O)) -> Self {
        on_select(option);
        Self::Closed
    }
}

/// Text shown on the toggle button: the selected option's name, otherwise the
/// placeholder.
pub fn button_label<'a, T>(
    selected: Option<&'a DropdownOption<T>>,
    placeholder: &'a str,
) -> &'a str {
    selected.map_or(placeholder, |option| option.name.as_str())
}
