use contracts::dropdown::{DropdownOption, OptionId};
use leptos::prelude::*;

/// Option list shown while the dropdown is open.
///
/// Items react to `mousedown` with the default action prevented: the toggle
/// button keeps focus, so its blur-close never races the selection.
#[component]
pub fn DropdownMenu<T>(
    #[prop(into)] options: Signal<Vec<DropdownOption<T>>>,
    #[prop(into)] selected_id: Signal<Option<OptionId>>,
    on_select: Callback<DropdownOption<T>>,
    render_option: Option<Callback<DropdownOption<T>, AnyView>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    view! {
        <ul class="dropdown__menu" role="listbox">
            <For
                each=move || options.get()
                key={|option: &DropdownOption<T>| option.id.clone()}
                children={move |option: DropdownOption<T>| {
                    let option_id = option.id.clone();
                    let is_selected = Memo::new(move |_| {
                        selected_id.with(|selected| selected.as_ref() == Some(&option_id))
                    });
                    let content = match render_option {
                        Some(render) => render.run(option.clone()),
                        None => option.name.clone().into_any(),
                    };

                    view! {
                        <li
                            role="option"
                            class=move || {
                                if is_selected.get() {
                                    "dropdown__item dropdown__item--selected"
                                } else {
                                    "dropdown__item"
                                }
                            }
                            aria-selected=move || is_selected.get().to_string()
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                on_select.run(option.clone());
                            }
                        >
                            {content}
                        </li>
                    }
                }}
            />
        </ul>
    }
}
