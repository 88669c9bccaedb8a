//! Browser capabilities the referral view depends on, behind small traits so the
//! fallback chains can be exercised without a browser.

use crate::common::SharePayload;
use futures::future::LocalBoxFuture;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod clipboard;
mod share;

pub use clipboard::*;
pub use share::*;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The capability isn't exposed by this browser or context.
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// The platform call ran and rejected, e.g. permission denied.
    #[error("rejected: {0}")]
    Rejected(String),

    /// `document.execCommand` reported failure.
    #[error("command '{0}' failed")]
    CommandFailed(&'static str),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("invalid payload: {0}")]
    Payload(String),
}

/// The result of a single clipboard or share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// The user dismissed the platform UI. Not an error.
    Cancelled,
    Failed(PlatformError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

pub trait ClipboardProvider {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Outcome>;
}

pub trait ShareProvider {
    fn is_available(&self) -> bool;

    fn share<'a>(&'a self, payload: &'a SharePayload) -> LocalBoxFuture<'a, Outcome>;
}

/// Looks up `navigator.<name>`, treating `undefined` and `null` as absent.
fn navigator_property(name: &str) -> Option<JsValue> {
    let navigator = web_sys::window()?.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Looks up `navigator.<object>.<method>` (or `navigator.<method>` when `object` is None)
/// and returns it together with the receiver it must be called on.
fn navigator_method(object: Option<&str>, method: &str) -> Option<(JsValue, js_sys::Function)> {
    let receiver = match object {
        Some(object) => navigator_property(object)?,
        None => web_sys::window()?.navigator().into(),
    };

    let function = js_sys::Reflect::get(&receiver, &JsValue::from_str(method)).ok()?;
    if !function.is_function() {
        return None;
    }

    Some((receiver, function.unchecked_into()))
}

/// Awaits whatever a platform call returned, promise or not.
async fn settle(returned: Result<JsValue, JsValue>) -> Result<JsValue, JsValue> {
    let promise = js_sys::Promise::resolve(&returned?);
    wasm_bindgen_futures::JsFuture::from(promise).await
}

fn js_reason(err: &JsValue) -> String {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(exception) => format!("{}: {}", exception.name(), exception.message()),
        None => format!("{:?}", err),
    }
}
