//! DOM helpers for the browser tests

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, HtmlElement, MouseEvent, MouseEventInit};

/// Fresh `<div>` attached to the document body
pub fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.dyn_into::<HtmlElement>().unwrap()
}

pub fn query(parent: &HtmlElement, selector: &str) -> HtmlElement {
    parent
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

/// Bubbling, cancelable `mousedown`, as a real pointer press would send
pub fn mouse_down() -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap()
}

/// Plain event; `input` must bubble to reach delegated handlers, `blur` does not
pub fn event(name: &str, bubbles: bool) -> Event {
    let init = EventInit::new();
    init.set_bubbles(bubbles);
    Event::new_with_event_init_dict(name, &init).unwrap()
}

/// Lets scheduled reactive effects flush to the DOM
pub async fn settle() {
    TimeoutFuture::new(0).await;
    TimeoutFuture::new(0).await;
}
