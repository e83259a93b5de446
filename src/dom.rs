use motion_core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener for the page lifetime.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn computed_position(el: &web::Element) -> Option<String> {
    web::window()?
        .get_computed_style(el)
        .ok()
        .flatten()?
        .get_property_value("position")
        .ok()
}

pub fn create_div(document: &web::Document, class: &str) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    Some(el)
}

pub fn append_to_body(document: &web::Document, el: &web::Element) -> bool {
    document
        .body()
        .map(|b| b.append_child(el).is_ok())
        .unwrap_or(false)
}

/// Append a `<style>` element with static CSS to `<head>`.
pub fn inject_style(document: &web::Document, css: &str) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        log::debug!("[dom] cannot inject style");
        return;
    };
    style.set_text_content(Some(css));
    _ = head.append_child(&style);
}

pub fn prefers_reduced_motion(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}
