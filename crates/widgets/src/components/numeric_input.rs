use super::class_list;
use contracts::numeric::NumericText;
use leptos::prelude::*;

/// Text field for numbers.
///
/// Keeps whatever the user typed (so partial input like `"-"` stays editable)
/// and reports a number only when the text has a numeric prefix.
#[component]
pub fn NumericInput(
    /// Starting value. Only seeds the text; later edits are the field's own
    #[prop(into)]
    value: f64,
    /// Called on every keystroke whose text parses to a number
    #[prop(into)]
    on_change: Callback<f64>,
    /// Called on focus loss with the parse of the current text (may be NaN)
    #[prop(optional)]
    on_blur: Option<Callback<f64>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let text = RwSignal::new(NumericText::new(value));
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <input
            type="text"
            inputmode="decimal"
            class=move || class_list("numeric-input", class.get())
            placeholder=input_placeholder
            prop:value=move || text.with(|state| state.text().to_string())
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                match text.try_update(|state| state.input(raw)).flatten() {
                    Some(number) => on_change.run(number),
                    None => log::debug!("numeric input holds non-numeric text, change suppressed"),
                }
            }
            on:blur=move |_| {
                if let Some(handler) = on_blur {
                    handler.run(text.with_untracked(|state| state.blur_value()));
                }
            }
        />
    }
}
