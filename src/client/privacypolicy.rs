#![allow(non_snake_case)]

use crate::client;

use client::top_bar;
use client::BackButton;
use dioxus::prelude::*;

const LAST_UPDATED: &str = "March 1, 2024";

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "What we collect",
        &[
            "When you create an account we store your email address and the name you choose to display.",
            "While you learn we record your lesson progress, streaks and quiz results so you can pick up where you left off on any device.",
        ],
    ),
    (
        "How we use it",
        &[
            "Your data is used to run the app: syncing progress, personalising lesson recommendations and managing your subscription.",
            "We never sell your personal data, and we don't show third-party advertising.",
        ],
    ),
    (
        "Referrals",
        &[
            "Your referral link contains an anonymous identifier. When someone signs up through it we credit your account, and we only tell you how many friends joined, never who they are.",
        ],
    ),
    (
        "Storage on your device",
        &[
            "The app keeps a small amount of data in your browser's local storage, such as your anonymous identifier. Clearing your browser data removes it.",
        ],
    ),
    (
        "Your rights",
        &[
            "You can request a copy of your data or ask us to delete your account at any time from the account settings or by contacting support.",
        ],
    ),
    (
        "Changes",
        &[
            "If this policy changes in a meaningful way we will let you know in the app before the change takes effect.",
        ],
    ),
];

#[component]
pub fn PrivacyView(on_back: EventHandler) -> Element {
    rsx! {
        style { { include_str!("views.css") } }
        { top_bar() }
        div {
            class: "page",
            BackButton { on_back: on_back }
            h1 { "Privacy Policy" }
            p { class: "muted", "Last updated: {LAST_UPDATED}" }
            for (heading, paragraphs) in SECTIONS.iter().copied() {
                section {
                    key: "{heading}",
                    h2 { "{heading}" }
                    for paragraph in paragraphs.iter() {
                        p { "{paragraph}" }
                    }
                }
            }
        }
    }
}
