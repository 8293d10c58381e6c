use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn LearnView() -> Element {
    let ctx = use_context::<AppContext>();
    let lesson_id = ctx.current_lesson_id().value();

    rsx! {
        div { class: "page",
            h2 { "Learn" }
            if ctx.is_admin() {
                p { class: "admin-badge", "Admin" }
            }
            div { class: "button primary",
                Link { to: Route::Lesson { lesson_id }, "Continue lesson" }
            }
        }
    }
}
