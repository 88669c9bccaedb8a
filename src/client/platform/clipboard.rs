use super::*;

use std::rc::Rc;
use web_sys::{Element, HtmlDocument, HtmlTextAreaElement};

/// `navigator.clipboard.writeText`.
#[derive(Default, Clone, Copy)]
pub struct AsyncClipboard;

impl ClipboardProvider for AsyncClipboard {
    fn name(&self) -> &'static str {
        "async"
    }

    fn is_available(&self) -> bool {
        navigator_method(Some("clipboard"), "writeText").is_some()
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Outcome> {
        Box::pin(async move {
            let Some((clipboard, write_text)) = navigator_method(Some("clipboard"), "writeText")
            else {
                return Outcome::Failed(PlatformError::Unavailable("navigator.clipboard"));
            };

            match settle(write_text.call1(&clipboard, &JsValue::from_str(text))).await {
                Ok(_) => Outcome::Succeeded,
                Err(err) => Outcome::Failed(PlatformError::Rejected(js_reason(&err))),
            }
        })
    }
}

/// Copies through an off-screen `<textarea>` and `document.execCommand("copy")`.
#[derive(Default, Clone, Copy)]
pub struct LegacyClipboard;

/// Removes the element from the document when dropped.
struct Detached(Element);

impl Drop for Detached {
    fn drop(&mut self) {
        self.0.remove();
    }
}

impl LegacyClipboard {
    fn document() -> Result<HtmlDocument, PlatformError> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PlatformError::Dom("no document".to_string()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| PlatformError::Dom("document is not an html document".to_string()))
    }

    fn copy(text: &str) -> Result<(), PlatformError> {
        let document = Self::document()?;
        let body = document
            .body()
            .ok_or_else(|| PlatformError::Dom("no body".to_string()))?;

        let textarea: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|err| PlatformError::Dom(js_reason(&err)))?
            .dyn_into()
            .map_err(|_| PlatformError::Dom("not a textarea".to_string()))?;
        // Removing an element that was never attached is a no-op.
        let _attached = Detached(textarea.clone().into());

        textarea.set_value(text);
        textarea.set_read_only(true);
        let style = textarea.style();
        for (property, value) in [("position", "fixed"), ("top", "0"), ("left", "-9999px")] {
            style
                .set_property(property, value)
                .map_err(|err| PlatformError::Dom(js_reason(&err)))?;
        }

        body.append_child(&textarea)
            .map_err(|err| PlatformError::Dom(js_reason(&err)))?;

        textarea.select();
        match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(PlatformError::CommandFailed("copy")),
            Err(err) => Err(PlatformError::Rejected(js_reason(&err))),
        }
    }
}

impl ClipboardProvider for LegacyClipboard {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn is_available(&self) -> bool {
        Self::document().is_ok_and(|document| document.body().is_some())
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Outcome> {
        Box::pin(async move {
            match Self::copy(text) {
                Ok(()) => Outcome::Succeeded,
                Err(err) => Outcome::Failed(err),
            }
        })
    }
}

/// Clipboard providers in order of preference.
#[derive(Clone)]
pub struct ClipboardChain {
    providers: Vec<Rc<dyn ClipboardProvider>>,
}

impl ClipboardChain {
    pub fn new(providers: Vec<Rc<dyn ClipboardProvider>>) -> Self {
        Self { providers }
    }

    /// Async clipboard first, then the `execCommand` fallback.
    pub fn browser() -> Self {
        Self::new(vec![Rc::new(AsyncClipboard), Rc::new(LegacyClipboard)])
    }

    /// Tries each available provider in turn, stopping at the first success.
    ///
    /// If nothing succeeds the last failure is returned. The caller gets no other
    /// signal; the view shows nothing in that case.
    pub async fn copy_with_fallback(&self, text: &str) -> Outcome {
        let mut last = Outcome::Failed(PlatformError::Unavailable("clipboard"));

        for provider in &self.providers {
            if !provider.is_available() {
                tracing::debug!("{} clipboard not available", provider.name());
                continue;
            }

            match provider.write_text(text).await {
                Outcome::Succeeded => {
                    tracing::info!("copied via {} clipboard", provider.name());
                    return Outcome::Succeeded;
                }
                outcome => {
                    tracing::warn!("{} clipboard failed: {:?}", provider.name(), outcome);
                    last = outcome;
                }
            }
        }

        tracing::warn!("no clipboard path succeeded, nothing was copied");
        last
    }
}
