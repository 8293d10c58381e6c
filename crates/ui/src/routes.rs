use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HeartsModal, LearnView, LessonView, PracticeModal, ShopView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LearnView)] Learn {},
        #[route("/lesson/:lesson_id", LessonView)] Lesson { lesson_id: u64 },
        #[route("/shop", ShopView)] Shop {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            // Modals live under the router so their actions can navigate.
            HeartsModal {}
            PracticeModal {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Lingo" }
            ul {
                li { Link { to: Route::Learn {}, "Learn" } }
                li { Link { to: Route::Shop {}, "Shop" } }
            }
        }
    }
}
