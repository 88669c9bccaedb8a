use crate::client::feedback::{CopyFeedback, FeedbackFlag, Scheduler};
use crate::client::platform::{share_or_copy, ClipboardChain, Outcome, ShareOutcome, ShareProvider};
use crate::common::SharePayload;
use std::cell::RefCell;
use std::rc::Rc;

/// The copy and share buttons of the referral view.
pub struct ReferralActions<F: FeedbackFlag, S: Scheduler> {
    clipboard: ClipboardChain,
    share: Rc<dyn ShareProvider>,
    feedback: Rc<RefCell<CopyFeedback<F, S>>>,
}

impl<F: FeedbackFlag, S: Scheduler> Clone for ReferralActions<F, S> {
    fn clone(&self) -> Self {
        Self {
            clipboard: self.clipboard.clone(),
            share: self.share.clone(),
            feedback: self.feedback.clone(),
        }
    }
}

impl<F: FeedbackFlag, S: Scheduler> ReferralActions<F, S> {
    pub fn new(
        clipboard: ClipboardChain,
        share: Rc<dyn ShareProvider>,
        feedback: CopyFeedback<F, S>,
    ) -> Self {
        Self {
            clipboard,
            share,
            feedback: Rc::new(RefCell::new(feedback)),
        }
    }

    pub fn copied(&self) -> bool {
        self.feedback.borrow().copied()
    }

    pub async fn handle_copy(&self, link: &str) -> Outcome {
        let outcome = self.clipboard.copy_with_fallback(link).await;
        if outcome.is_success() {
            self.feedback.borrow_mut().confirm();
        }
        outcome
    }

    pub async fn handle_share(&self, payload: &SharePayload) -> ShareOutcome {
        let outcome = share_or_copy(self.share.as_ref(), &self.clipboard, payload).await;
        if outcome == ShareOutcome::Copied(Outcome::Succeeded) {
            self.feedback.borrow_mut().confirm();
        }
        outcome
    }
}
