//! Entry points for hosts that consume the bundle from plain JavaScript.
//!
//! The generated glue works both as an ES module and, built with
//! `--target no-modules`, through the global `wasm_bindgen` object.

use crate::components::{Dropdown, NumericInput};
use crate::styles::inject_dropdown_styles;
use contracts::dropdown::{DropdownOption, OptionId};
use contracts::numeric::format_number;
use js_sys::{Array, Function, Reflect};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::any::Any;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};

const UNMOUNTED: &str = "Dropdown is unmounted";

/// Keeps a mounted widget alive until `unmount` is called or the handle is freed
#[wasm_bindgen]
pub struct WidgetHandle {
    mounted: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl WidgetHandle {
    /// Removes the widget from the page and drops its state
    pub fn unmount(&mut self) {
        self.mounted.take();
    }
}

impl WidgetHandle {
    fn new(mounted: impl Any) -> Self {
        Self {
            mounted: Some(Box::new(mounted)),
        }
    }

    fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

/// The host's own option object, handed back untouched to `onSelect` and
/// `renderOption`.
#[derive(Clone)]
pub struct JsOption(SendWrapper<JsValue>);

impl JsOption {
    fn value(&self) -> &JsValue {
        &self.0
    }

    fn into_value(self) -> JsValue {
        self.0.take()
    }
}

/// Handle of a mounted dropdown.
///
/// The selection stays owned by the host: after `onSelect` fires, call
/// `setSelected` to show the new choice on the button.
#[wasm_bindgen]
pub struct DropdownHandle {
    options: RwSignal<Vec<DropdownOption<JsOption>>>,
    selected: RwSignal<Option<DropdownOption<JsOption>>>,
    widget: WidgetHandle,
}

#[wasm_bindgen]
impl DropdownHandle {
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&self, options: JsValue) -> Result<(), JsValue> {
        let options = options_from_js(options)?;
        self.store(self.options, options).map_err(JsValue::from_str)
    }

    #[wasm_bindgen(js_name = setSelected)]
    pub fn set_selected(&self, selected: JsValue) -> Result<(), JsValue> {
        let selected = selected_from_js(selected)?;
        self.store(self.selected, selected).map_err(JsValue::from_str)
    }

    /// Removes the dropdown and releases its options; later setters fail
    pub fn unmount(&mut self) {
        self.release();
    }
}

impl DropdownHandle {
    fn store<V>(&self, signal: RwSignal<V>, value: V) -> Result<(), &'static str>
    where
        V: Send + Sync + 'static,
    {
        if !self.widget.is_mounted() {
            return Err(UNMOUNTED);
        }
        signal.set(value);
        Ok(())
    }

    fn release(&mut self) {
        if self.widget.is_mounted() {
            self.widget.unmount();
            self.options.dispose();
            self.selected.dispose();
        }
    }
}

impl Drop for DropdownHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Mounts a `NumericInput` into `parent`
#[wasm_bindgen(js_name = mountNumericInput)]
pub fn mount_numeric_input(
    parent: HtmlElement,
    value: f64,
    on_change: Function,
    on_blur: Option<Function>,
    placeholder: Option<String>,
    class_name: Option<String>,
) -> WidgetHandle {
    let mounted = leptos::mount::mount_to(parent, move || {
        let on_change = js_callback(on_change, "onChange", JsValue::from_f64);
        // An absent onBlur must mean "no call", not a no-op callback
        match on_blur {
            Some(on_blur) => {
                let on_blur = js_callback(on_blur, "onBlur", JsValue::from_f64);
                view! {
                    <NumericInput
                        value=value
                        on_change=on_change
                        on_blur=on_blur
                        placeholder=placeholder
                        class=class_name
                    />
                }
                .into_any()
            }
            None => view! {
                <NumericInput
                    value=value
                    on_change=on_change
                    placeholder=placeholder
                    class=class_name
                />
            }
            .into_any(),
        }
    });
    WidgetHandle::new(mounted)
}

/// Mounts a `Dropdown` into `parent`.
///
/// `options` is an array of `{id, name, ...}` objects and `selected` is one
/// such object or `null`. Only `id` and `name` are read; `onSelect` and
/// `renderOption` receive the host's original objects. `renderOption` may
/// return a string or a DOM node.
#[wasm_bindgen(js_name = mountDropdown)]
pub fn mount_dropdown(
    parent: HtmlElement,
    options: JsValue,
    selected: JsValue,
    on_select: Function,
    placeholder: Option<String>,
    render_option: Option<Function>,
) -> Result<DropdownHandle, JsValue> {
    inject_dropdown_styles();

    let options = RwSignal::new(options_from_js(options)?);
    let selected = RwSignal::new(selected_from_js(selected)?);

    let mounted = leptos::mount::mount_to(parent, move || {
        let on_select = js_callback(on_select, "onSelect", option_to_js);
        let render_option = render_option.map(js_render_option);
        match render_option {
            Some(render_option) => view! {
                <Dropdown
                    options=options
                    selected_option=Signal::derive(move || selected.get())
                    on_select=on_select
                    placeholder=placeholder
                    render_option=render_option
                />
            }
            .into_any(),
            None => view! {
                <Dropdown
                    options=options
                    selected_option=Signal::derive(move || selected.get())
                    on_select=on_select
                    placeholder=placeholder
                />
            }
            .into_any(),
        }
    });

    Ok(DropdownHandle {
        options,
        selected,
        widget: WidgetHandle::new(mounted),
    })
}

/// Wraps a JS function as a Leptos callback; exceptions are logged, not rethrown
fn js_callback<In: 'static>(
    function: Function,
    name: &'static str,
    to_js: fn(In) -> JsValue,
) -> Callback<In> {
    let function = SendWrapper::new(function);
    Callback::new(move |arg: In| {
        if let Err(err) = function.call1(&JsValue::NULL, &to_js(arg)) {
            log::error!("{} callback threw: {:?}", name, err);
        }
    })
}

fn js_render_option(function: Function) -> Callback<DropdownOption<JsOption>, AnyView> {
    let function = SendWrapper::new(function);
    Callback::new(move |option: DropdownOption<JsOption>| {
        let content = match function.call1(&JsValue::NULL, option.extra.value()) {
            Ok(rendered) => item_content(rendered, &option.name),
            Err(err) => {
                log::error!("renderOption callback threw: {:?}", err);
                ItemContent::Text(option.name.clone())
            }
        };
        render_item(content)
    })
}

/// What a host `renderOption` produced for one item
#[derive(Debug, PartialEq)]
enum ItemContent {
    Text(String),
    Node(Node),
}

/// Strings and numbers become text, DOM nodes are inserted as is, anything
/// else falls back to the option's name.
fn item_content(rendered: JsValue, name: &str) -> ItemContent {
    if let Some(text) = rendered.as_string() {
        return ItemContent::Text(text);
    }
    if let Some(number) = rendered.as_f64() {
        return ItemContent::Text(format_number(number));
    }
    match rendered.dyn_into::<Node>() {
        Ok(node) => ItemContent::Node(node),
        Err(_) => ItemContent::Text(name.to_string()),
    }
}

fn render_item(content: ItemContent) -> AnyView {
    match content {
        ItemContent::Text(text) => text.into_any(),
        ItemContent::Node(node) => {
            let host = NodeRef::<leptos::html::Span>::new();
            let node = SendWrapper::new(node);
            Effect::new(move |_| {
                if let Some(span) = host.get() {
                    if let Err(err) = span.append_child(&node) {
                        log::error!("Failed to insert rendered option: {:?}", err);
                    }
                }
            });
            view! { <span class="dropdown__item-content" node_ref=host></span> }.into_any()
        }
    }
}

fn options_from_js(options: JsValue) -> Result<Vec<DropdownOption<JsOption>>, JsValue> {
    let options = options
        .dyn_into::<Array>()
        .map_err(|_| JsValue::from_str("Dropdown options must be an array"))?;
    options
        .iter()
        .enumerate()
        .map(|(index, option)| option_from_js(option, OptionId::Int(index as i64)))
        .collect()
}

fn selected_from_js(selected: JsValue) -> Result<Option<DropdownOption<JsOption>>, JsValue> {
    if selected.is_null() || selected.is_undefined() {
        return Ok(None);
    }
    option_from_js(selected, OptionId::Text(String::new())).map(Some)
}

/// Reads `id` and `name` off a host object and keeps the object itself.
/// A missing or non-integer, non-string id falls back to `fallback_id`.
fn option_from_js(
    option: JsValue,
    fallback_id: OptionId,
) -> Result<DropdownOption<JsOption>, JsValue> {
    let id = Reflect::get(&option, &JsValue::from_str("id"))?;
    let name = Reflect::get(&option, &JsValue::from_str("name"))?;
    let id = serde_wasm_bindgen::from_value::<OptionId>(id).unwrap_or(fallback_id);
    Ok(DropdownOption::with_extra(
        id,
        name.as_string().unwrap_or_default(),
        JsOption(SendWrapper::new(option)),
    ))
}

fn option_to_js(option: DropdownOption<JsOption>) -> JsValue {
    option.extra.into_value()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{container, mouse_down, query, settle};
    use js_sys::Object;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_item_content_text() {
        assert_eq!(
            item_content(JsValue::from_str("Apple"), "A"),
            ItemContent::Text("Apple".to_string())
        );
        assert_eq!(
            item_content(JsValue::from_f64(2.5), "A"),
            ItemContent::Text("2.5".to_string())
        );
        assert_eq!(
            item_content(JsValue::NULL, "A"),
            ItemContent::Text("A".to_string())
        );
        assert_eq!(
            item_content(Object::new().into(), "A"),
            ItemContent::Text("A".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_item_content_node() {
        let document = web_sys::window().unwrap().document().unwrap();
        let badge: Node = document.create_element("b").unwrap().into();
        assert_eq!(
            item_content(badge.clone().into(), "A"),
            ItemContent::Node(badge)
        );
    }

    #[wasm_bindgen_test]
    fn test_options_keep_host_objects() {
        let options = js_sys::eval(
            "[{id: 1, name: 'A', format: () => 'a', at: new Date(0)}, {id: 'b', name: 'B'}, {name: 'C'}]",
        )
        .unwrap();
        let decoded = options_from_js(options.clone()).unwrap();

        let ids: Vec<OptionId> = decoded.iter().map(|o| o.id.clone()).collect();
        assert_eq!(
            ids,
            vec![OptionId::Int(1), OptionId::from("b"), OptionId::Int(2)]
        );
        assert_eq!(decoded[1].name, "B");
        let first = Array::from(&options).get(0);
        assert!(Object::is(decoded[0].extra.value(), &first));
    }

    #[wasm_bindgen_test]
    fn test_options_must_be_an_array() {
        assert!(options_from_js(JsValue::from_str("nope")).is_err());
        assert!(selected_from_js(JsValue::NULL).unwrap().is_none());
        assert!(selected_from_js(JsValue::UNDEFINED).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_dropdown_hands_back_host_objects() {
        let parent = container();
        let options =
            js_sys::eval("[{id: 1, name: 'A'}, {id: 2, name: 'B', tag: () => 'b'}]").unwrap();
        let picked = Array::new();
        let on_select = Function::new_with_args("list, option", "list.push(option)")
            .bind1(&JsValue::NULL, &picked);
        let render = Function::new_with_args("option", "return option.name + '!'");

        let mut handle = mount_dropdown(
            parent.clone(),
            options.clone(),
            JsValue::NULL,
            on_select,
            Some("Pick".to_string()),
            Some(render),
        )
        .unwrap();

        let button = query(&parent, ".dropdown__toggle");
        assert!(button.text_content().unwrap_or_default().contains("Pick"));
        button.click();
        settle().await;

        let items = parent.query_selector_all(".dropdown__item").unwrap();
        assert_eq!(items.length(), 2);
        assert_eq!(items.get(0).unwrap().text_content(), Some("A!".to_string()));

        items.get(1).unwrap().dispatch_event(&mouse_down()).unwrap();
        assert_eq!(picked.length(), 1);
        assert!(Object::is(&picked.get(0), &Array::from(&options).get(1)));

        handle.unmount();
        assert!(handle.set_options(Array::new().into()).is_err());
    }
}
