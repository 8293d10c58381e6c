use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::store::ModalStores;

#[component]
pub fn App() -> Element {
    use_context_provider(ModalStores::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Lingo" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
