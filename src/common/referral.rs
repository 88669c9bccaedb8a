use crate::common::CONFIG;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strum_macros::{EnumString, IntoStaticStr};

/// A shareable link that attributes signups to `user_id`.
///
/// Purely derived from the page location and the user id, so it's recomputed
/// on every render instead of being cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralLink {
    base_url: String,
    user_id: String,
}

impl ReferralLink {
    pub fn derive(location: &str, user_id: &str) -> Self {
        if needs_encoding(user_id) {
            tracing::warn!(
                "user id {:?} is embedded in the referral link without percent-encoding",
                user_id
            );
        }

        Self {
            base_url: base_url(location).to_string(),
            user_id: user_id.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn link(&self) -> String {
        self.to_string()
    }
}

impl Display for ReferralLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/?ref={}", self.base_url, self.user_id)
    }
}

/// Strips the query string and fragment, then a single trailing slash.
fn base_url(location: &str) -> &str {
    let end = location
        .find(|c| c == '?' || c == '#')
        .unwrap_or(location.len());
    let base = &location[..end];
    base.strip_suffix('/').unwrap_or(base)
}

/// True if `user_id` holds anything outside the URL "unreserved" set.
fn needs_encoding(user_id: &str) -> bool {
    user_id.is_empty()
        || user_id
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')))
}

/// The three fields handed to the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(link: &ReferralLink) -> Self {
        Self {
            title: CONFIG.share_title.clone(),
            text: CONFIG.share_text.clone(),
            url: link.link(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BonusStatus {
    Earned,
    Pending,
}

impl BonusStatus {
    pub fn css_class(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Earned => "Bonus earned",
            Self::Pending => "No bonus yet",
        }
    }
}

/// Referral counters as reported by the backend. Never mutated locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferralProgress {
    pub count: u32,
    pub cap: u32,
}

impl ReferralProgress {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            cap: CONFIG.referral_cap,
        }
    }

    /// e.g. "3/5"
    pub fn label(&self) -> String {
        format!("{}/{}", self.count, self.cap)
    }

    /// One PRO month per referral; the cap is enforced by the program rules upstream.
    pub fn bonus_months(&self) -> u32 {
        self.count
    }

    pub fn status(&self) -> BonusStatus {
        if self.count > 0 {
            BonusStatus::Earned
        } else {
            BonusStatus::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn strips_query_and_fragment() {
        let link = ReferralLink::derive("https://app.example/learn?x=1#frag", "abc123");
        assert_eq!(link.link(), "https://app.example/learn/?ref=abc123");
    }

    #[test]
    fn strips_single_trailing_slash() {
        let link = ReferralLink::derive("https://app.example/", "abc");
        assert_eq!(link.base_url(), "https://app.example");
        assert_eq!(link.link(), "https://app.example/?ref=abc");

        let link = ReferralLink::derive("https://app.example/learn//", "abc");
        assert_eq!(link.link(), "https://app.example/learn//?ref=abc");
    }

    #[test]
    fn fragment_containing_question_mark() {
        let link = ReferralLink::derive("https://app.example/a#section?b=2", "u");
        assert_eq!(link.link(), "https://app.example/a/?ref=u");
    }

    #[test]
    fn link_ignores_existing_query() {
        let locations = [
            "https://app.example/learn",
            "https://app.example/learn/",
            "https://app.example/learn?ref=someone_else",
            "https://app.example/learn/?a=1&b=2#top",
            "https://app.example/learn#",
        ];

        for location in locations {
            let link = ReferralLink::derive(location, "abc123").link();
            assert_eq!(link, "https://app.example/learn/?ref=abc123", "{}", location);

            let parsed = url::Url::parse(&link).unwrap();
            let pairs: Vec<_> = parsed.query_pairs().collect();
            assert_eq!(pairs.len(), 1);
            assert_eq!(pairs[0].0, "ref");
            assert_eq!(pairs[0].1, "abc123");
            assert!(parsed.fragment().is_none());
        }
    }

    #[test]
    fn new_user_id_gives_new_link() {
        let location = "https://app.example/learn";
        let before = ReferralLink::derive(location, "old");
        let after = ReferralLink::derive(location, "new");
        assert_ne!(before, after);
        assert_eq!(after.user_id(), "new");
        assert_eq!(ReferralLink::derive(location, "new"), after);
    }

    #[test]
    fn user_id_is_used_verbatim() {
        let link = ReferralLink::derive("https://app.example", "a b&c");
        assert_eq!(link.link(), "https://app.example/?ref=a b&c");

        let link = ReferralLink::derive("https://app.example", "");
        assert_eq!(link.link(), "https://app.example/?ref=");
    }

    #[test]
    fn encoding_check() {
        assert!(!needs_encoding("abc-123_x.y~z"));
        assert!(needs_encoding("a b"));
        assert!(needs_encoding("a&b"));
        assert!(needs_encoding("ü"));
        assert!(needs_encoding(""));
    }

    #[test]
    fn share_payload_carries_link() {
        let link = ReferralLink::derive("https://app.example/learn?x=1", "abc123");
        let payload = SharePayload::new(&link);
        assert_eq!(payload.url, "https://app.example/learn/?ref=abc123");
        assert_eq!(payload.title, CONFIG.share_title);
        assert_eq!(payload.text, CONFIG.share_text);
    }

    #[test]
    fn progress_with_referrals() {
        let progress = ReferralProgress::new(3);
        assert_eq!(progress.label(), "3/5");
        assert_eq!(progress.bonus_months(), 3);
        assert_eq!(progress.status(), BonusStatus::Earned);
        assert_eq!(progress.status().css_class(), "earned");
    }

    #[test]
    fn progress_without_referrals() {
        let progress = ReferralProgress::new(0);
        assert_eq!(progress.label(), "0/5");
        assert_eq!(progress.bonus_months(), 0);
        assert_eq!(progress.status(), BonusStatus::Pending);
        assert_eq!(progress.status().css_class(), "pending");
    }

    #[test]
    fn bonus_status_from_class() {
        assert_eq!(BonusStatus::from_str("earned").unwrap(), BonusStatus::Earned);
        assert!(BonusStatus::from_str("gold").is_err());
    }
}
