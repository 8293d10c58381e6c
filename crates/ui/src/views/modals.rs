use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::store::{use_hearts_modal, use_practice_modal};

#[component]
pub fn HeartsModal() -> Element {
    let modal = use_hearts_modal();
    let navigator = use_navigator();

    if !modal.is_open() {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog", id: "hearts-modal",
                img { class: "modal-art", src: "/mascot_bad.svg", alt: "Mascot" }
                h3 { class: "modal-title", "You ran out of hearts!" }
                p { class: "modal-body", "Get Pro for unlimited hearts, or purchase them in the store." }
                div { class: "modal-actions",
                    button {
                        id: "hearts-modal-upgrade",
                        class: "button primary",
                        onclick: move |_| {
                            modal.close();
                            navigator.push(Route::Shop {});
                        },
                        "Get unlimited hearts"
                    }
                    button {
                        id: "hearts-modal-dismiss",
                        class: "button ghost",
                        onclick: move |_| modal.close(),
                        "No thanks"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PracticeModal() -> Element {
    let modal = use_practice_modal();

    if !modal.is_open() {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog", id: "practice-modal",
                img { class: "modal-art", src: "/heart.svg", alt: "Heart" }
                h3 { class: "modal-title", "Practice lesson" }
                p { class: "modal-body",
                    "Use practice lessons to regain hearts and points. You cannot loose hearts or points in practice lessons."
                }
                div { class: "modal-actions",
                    button {
                        id: "practice-modal-dismiss",
                        class: "button primary",
                        onclick: move |_| modal.close(),
                        "I understand"
                    }
                }
            }
        }
    }
}
