use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::HeaderVm;

#[component]
pub fn Header(hearts: i32, percentage: f64, has_active_subscription: bool) -> Element {
    let vm = HeaderVm {
        hearts,
        percentage,
        has_active_subscription,
    };

    rsx! {
        header { class: "quiz-header",
            div { class: "quiz-exit",
                Link { to: Route::Learn {}, "Exit lesson" }
            }
            div {
                class: "quiz-progress",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{vm.percentage}",
                div { class: "quiz-progress-fill", style: "width: {vm.progress_width()}" }
            }
            div { class: "quiz-hearts",
                span { class: "quiz-hearts-icon", "♥" }
                span { class: "quiz-hearts-count", "{vm.hearts_label()}" }
            }
        }
    }
}
