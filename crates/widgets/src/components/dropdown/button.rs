use leptos::prelude::*;

/// Toggle button of the dropdown, labelled with the selection or placeholder
#[component]
pub fn DropdownButton(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] is_open: Signal<bool>,
    on_toggle: Callback<()>,
    on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if is_open.get() {
                    "dropdown__toggle dropdown__toggle--open"
                } else {
                    "dropdown__toggle"
                }
            }
            aria-haspopup="listbox"
            aria-expanded=move || is_open.get().to_string()
            on:click=move |_| on_toggle.run(())
            on:blur=move |_| on_blur.run(())
        >
            <span class="dropdown__label">{move || label.get()}</span>
            <span class="dropdown__caret">"▾"</span>
        </button>
    }
}
