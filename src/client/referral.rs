#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::actions::ReferralActions;
use client::feedback::{CopyFeedback, TimeoutScheduler};
use client::platform::{ClipboardChain, NativeShare};
use client::top_bar;
use client::utils::current_location;
use client::BackButton;
use common::{ReferralLink, ReferralProgress, SharePayload, CONFIG};
use dioxus::prelude::*;
use std::rc::Rc;

const HOW_IT_WORKS: [&str; 3] = [
    "Share your personal link with friends.",
    "They sign up and start learning.",
    "You get one month of PRO for every friend, up to five.",
];

#[component]
pub fn ReferralView(on_back: EventHandler, referral_count: u32, user_id: String) -> Element {
    let copied = use_signal(|| false);

    // Hooks are dropped with the component, taking any pending reset with them.
    let actions = use_hook(move || {
        let feedback = CopyFeedback::new(copied, TimeoutScheduler, CONFIG.copied_reset_delay());
        ReferralActions::new(ClipboardChain::browser(), Rc::new(NativeShare), feedback)
    });

    let referral = ReferralLink::derive(&current_location(), &user_id);
    let link = referral.link();
    let payload = SharePayload::new(&referral);

    let on_copy = {
        let actions = actions.clone();
        let link = link.clone();
        move |_: MouseEvent| {
            let actions = actions.clone();
            let link = link.clone();
            spawn(async move {
                // A total failure leaves the label on "Copy"; the chain logs it.
                actions.handle_copy(&link).await;
            });
        }
    };

    let on_share = move |_: MouseEvent| {
        let actions = actions.clone();
        let payload = payload.clone();
        spawn(async move {
            actions.handle_share(&payload).await;
        });
    };

    rsx! {
        ReferralPanel {
            link: link,
            referral_count: referral_count,
            copied: copied(),
            on_back: on_back,
            on_copy: on_copy,
            on_share: on_share,
        }
    }
}

#[component]
pub fn ReferralPanel(
    link: String,
    referral_count: u32,
    copied: bool,
    on_back: EventHandler,
    on_copy: EventHandler<MouseEvent>,
    on_share: EventHandler<MouseEvent>,
) -> Element {
    let progress = ReferralProgress::new(referral_count);
    let counter = progress.label();
    let months = progress.bonus_months();
    let status = progress.status();
    let status_class = status.css_class();
    let status_label = status.label();

    rsx! {
        style { { include_str!("views.css") } }
        { top_bar() }
        div {
            class: "page",
            BackButton { on_back: on_back }
            h1 { "Invite friends, learn for free" }

            div {
                class: "referral-link",
                input {
                    r#type: "text",
                    readonly: true,
                    value: "{link}",
                }
                button {
                    class: if copied { "confirm copied" } else { "confirm" },
                    onclick: move |evt| on_copy.call(evt),
                    if copied { "Copied!" } else { "Copy" }
                }
                button {
                    class: "share",
                    onclick: move |evt| on_share.call(evt),
                    "Share"
                }
            }

            div {
                class: "referral-progress",
                div {
                    class: "stat",
                    span { class: "stat-value", "{counter}" }
                    span { class: "muted", "friends joined" }
                }
                div {
                    class: "stat",
                    span { class: "stat-value", "{months}" }
                    span { class: "muted", "bonus months" }
                }
                div {
                    class: "bonus-status {status_class}",
                    "{status_label}"
                }
            }

            h2 { "How it works" }
            ol {
                for step in HOW_IT_WORKS {
                    li { "{step}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "https://app.example/learn/?ref=abc123";

    fn panel(props: (u32, bool)) -> Element {
        let (referral_count, copied) = props;
        rsx! {
            ReferralPanel {
                link: LINK.to_string(),
                referral_count: referral_count,
                copied: copied,
                on_back: move |_| {},
                on_copy: move |_| {},
                on_share: move |_| {},
            }
        }
    }

    fn render(referral_count: u32, copied: bool) -> String {
        let mut dom = VirtualDom::new_with_props(panel, (referral_count, copied));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn shows_progress_and_months() {
        let html = render(3, false);
        assert!(html.contains("3/5"), "{}", html);
        assert!(html.contains("class=\"stat-value\">3<"), "{}", html);
        assert!(html.contains("bonus-status earned"), "{}", html);
        assert!(!html.contains("bonus-status pending"), "{}", html);
    }

    #[test]
    fn no_referrals_is_pending() {
        let html = render(0, false);
        assert!(html.contains("0/5"), "{}", html);
        assert!(html.contains("bonus-status pending"), "{}", html);
        assert!(html.contains("No bonus yet"), "{}", html);
    }

    #[test]
    fn copy_label_follows_flag() {
        let idle = render(1, false);
        assert!(idle.contains("Copy"), "{}", idle);
        assert!(!idle.contains("Copied!"), "{}", idle);

        let copied = render(1, true);
        assert!(copied.contains("Copied!"), "{}", copied);
        assert!(copied.contains("confirm copied"), "{}", copied);
    }

    #[test]
    fn shows_link_and_steps() {
        let html = render(2, false);
        assert!(html.contains(LINK), "{}", html);
        for step in HOW_IT_WORKS {
            assert!(html.contains(step), "{}", step);
        }
    }
}
