use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Request, RequestInit, Response, Window};

/// The global `window`, or `None` outside a browser (SSR, native tests).
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console, bypassing the `log` facade.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

fn no_window() -> JsValue {
    JsValue::from_str("`window` unavailable")
}

/// Perform a GET request and return the browser `Response`.
///
/// # Errors
/// Returns an error if there is no window, the fetch rejects, or the result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let window = window().ok_or_else(no_window)?;
    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// POST `body` as JSON and return the browser `Response`.
///
/// # Errors
/// Returns an error if the request cannot be built or the fetch rejects.
#[allow(clippy::future_not_send)]
pub async fn post_json(url: &str, body: &str) -> Result<Response, JsValue> {
    let window = window().ok_or_else(no_window)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/json")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body stream fails or is not a string.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}
