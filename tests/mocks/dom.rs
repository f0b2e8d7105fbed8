use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function set_field(el, value, event_name) {
    el.value = value;
    el.dispatchEvent(new Event(event_name, { bubbles: true }));
}

export function field_value(el) {
    return el.value;
}

export function stub_alert() {
    window.__alerts = [];
    window.alert = function(message) {
        window.__alerts.push(String(message));
    };
}

export function alert_messages() {
    return JSON.stringify(window.__alerts || []);
}

export function go_to(path) {
    window.history.pushState(null, '', path);
    window.dispatchEvent(new PopStateEvent('popstate', { state: null }));
}
"#)]
extern "C" {
    /// Sets a form control's value and fires `event_name` as a user edit would.
    pub fn set_field(el: &web_sys::Element, value: &str, event_name: &str);
    pub fn field_value(el: &web_sys::Element) -> String;
    /// Swaps `window.alert` for a recorder so submissions never block the page.
    pub fn stub_alert();
    /// Recorded alert messages as a JSON array.
    pub fn alert_messages() -> String;
    /// Back/forward style navigation the router picks up from `popstate`.
    pub fn go_to(path: &str);
}
