use dioxus::prelude::*;

#[component]
pub fn ShopView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Shop" }
            p { "Spend your points on cool stuff." }
            div { class: "shop-item",
                span { "Unlimited hearts" }
                span { class: "muted", "Upgrade to Pro" }
            }
        }
    }
}
