//! Dropdown component: a toggle button that reveals a menu of options.
//!
//! Open/closed state is local to each instance. The selected option belongs
//! to the caller, who receives picks through `on_select` and passes the new
//! selection back in.

mod button;
mod menu;

use button::DropdownButton;
use contracts::dropdown::{button_label, DropdownOption, MenuState};
use leptos::prelude::*;
use menu::DropdownMenu;

/// Button text when nothing is selected and no placeholder is given.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

#[component]
pub fn Dropdown<T>(
    /// Options, listed in the order given. Ids must be unique within the list
    #[prop(into)]
    options: Signal<Vec<DropdownOption<T>>>,
    /// Currently selected option; `None` shows the placeholder
    #[prop(optional, into)]
    selected_option: MaybeProp<DropdownOption<T>>,
    /// Called with the picked option before the menu closes
    #[prop(into)]
    on_select: Callback<DropdownOption<T>>,
    /// Button text when nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Custom view for each menu item; defaults to the option's name
    #[prop(optional)]
    render_option: Option<Callback<DropdownOption<T>, AnyView>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let menu = RwSignal::new(MenuState::default());

    let label = Signal::derive(move || {
        let placeholder = placeholder
            .get()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());
        let selected = selected_option.get();
        button_label(selected.as_ref(), &placeholder).to_string()
    });
    let selected_id = Signal::derive(move || selected_option.get().map(|option| option.id));
    let is_open = Signal::derive(move || menu.get().is_open());

    let toggle = Callback::new(move |_: ()| {
        menu.update(|state| *state = state.toggle());
        log::debug!("dropdown toggled, open: {}", menu.get_untracked().is_open());
    });

    let close_on_blur = Callback::new(move |_: ()| {
        if menu.get_untracked().is_open() {
            menu.update(|state| *state = state.blur());
            log::debug!("dropdown closed on blur");
        }
    });

    let select = Callback::new(move |option: DropdownOption<T>| {
        log::debug!("dropdown option {} selected", option.id);
        let next = menu
            .get_untracked()
            .select(option, |chosen| on_select.run(chosen));
        menu.set(next);
    });

    view! {
        <div class="dropdown">
            <DropdownButton label=label is_open=is_open on_toggle=toggle on_blur=close_on_blur />
            <Show when=move || is_open.get()>
                <DropdownMenu
                    options=options
                    selected_id=selected_id
                    on_select=select
                    render_option=render_option
                />
            </Show>
        </div>
    }
}
