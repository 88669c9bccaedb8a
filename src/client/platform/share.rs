use super::*;

/// `navigator.share`.
#[derive(Default, Clone, Copy)]
pub struct NativeShare;

impl NativeShare {
    fn payload(payload: &SharePayload) -> Result<JsValue, PlatformError> {
        let json =
            serde_json::to_string(payload).map_err(|err| PlatformError::Payload(err.to_string()))?;
        js_sys::JSON::parse(&json).map_err(|err| PlatformError::Payload(js_reason(&err)))
    }
}

impl ShareProvider for NativeShare {
    fn is_available(&self) -> bool {
        navigator_method(None, "share").is_some()
    }

    fn share<'a>(&'a self, payload: &'a SharePayload) -> LocalBoxFuture<'a, Outcome> {
        Box::pin(async move {
            let Some((navigator, share)) = navigator_method(None, "share") else {
                return Outcome::Failed(PlatformError::Unavailable("navigator.share"));
            };

            let data = match Self::payload(payload) {
                Ok(data) => data,
                Err(err) => return Outcome::Failed(err),
            };

            match settle(share.call1(&navigator, &data)).await {
                Ok(_) => Outcome::Succeeded,
                Err(err) => {
                    let name = err.dyn_ref::<web_sys::DomException>().map(|e| e.name());
                    share_failure(name.as_deref(), js_reason(&err))
                }
            }
        })
    }
}

/// Dismissing the share sheet rejects with an `AbortError`; anything else is a real failure.
fn share_failure(error_name: Option<&str>, reason: String) -> Outcome {
    match error_name {
        Some("AbortError") => Outcome::Cancelled,
        _ => Outcome::Failed(PlatformError::Rejected(reason)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    /// Sharing wasn't possible, so the link went through the clipboard instead.
    Copied(Outcome),
}

/// Shares the payload, falling back to copying its url.
///
/// A cancelled share sheet is the user's decision and is left alone. Any other
/// failure, or no share capability at all, copies the link exactly once.
pub async fn share_or_copy(
    share: &dyn ShareProvider,
    clipboard: &ClipboardChain,
    payload: &SharePayload,
) -> ShareOutcome {
    if !share.is_available() {
        tracing::debug!("native share not available, copying link");
        return ShareOutcome::Copied(clipboard.copy_with_fallback(&payload.url).await);
    }

    match share.share(payload).await {
        Outcome::Succeeded => {
            tracing::info!("link shared");
            ShareOutcome::Shared
        }
        Outcome::Cancelled => {
            tracing::info!("share cancelled by user");
            ShareOutcome::Cancelled
        }
        Outcome::Failed(err) => {
            tracing::warn!("share failed ({}), copying link instead", err);
            ShareOutcome::Copied(clipboard.copy_with_fallback(&payload.url).await)
        }
    }
}
