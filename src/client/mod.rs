#![allow(non_snake_case)]

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

mod actions;
mod components;
mod feedback;
mod logging;
mod platform;
mod privacypolicy;
mod referral;
pub mod utils;

use components::*;
use privacypolicy::*;
use referral::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    logging::init();
    tracing::info!("starting app");
    launch(App);
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/privacy")]
    Privacy {},
    #[route("/referral")]
    Referral {},
}

/// What the views need to know about the signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    user_id: String,
    referral_count: u32,
}

impl State {
    pub fn load() -> Self {
        let s = Self {
            user_id: utils::load_user_id(),
            referral_count: utils::load_referral_count(),
        };
        tracing::info!("loaded state: {:?}", &s);
        s
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn referral_count(&self) -> u32 {
        self.referral_count
    }
}

fn App() -> Element {
    use_context_provider(State::load);

    rsx!(Router::<Route> {})
}

#[component]
fn Home() -> Element {
    rsx! {
        style { { include_str!("views.css") } }
        { top_bar() }
        div {
            class: "page",
            h1 { "Welcome back!" }
            ul {
                li {
                    Link { to: Route::Referral {}, "Invite friends" }
                }
                li {
                    Link { to: Route::Privacy {}, "Privacy policy" }
                }
            }
        }
    }
}

#[component]
fn Privacy() -> Element {
    let navigator = use_navigator();

    rsx! {
        PrivacyView {
            on_back: move |_| {
                navigator.push(Route::Home {});
            }
        }
    }
}

#[component]
fn Referral() -> Element {
    let navigator = use_navigator();
    let state = use_context::<State>();

    rsx! {
        ReferralView {
            on_back: move |_| {
                navigator.push(Route::Home {});
            },
            referral_count: state.referral_count(),
            user_id: state.user_id().to_string(),
        }
    }
}
