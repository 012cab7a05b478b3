use dioxus::prelude::*;
use crate::components::icons::{AlertTriangleIcon, ArrowLeftIcon};

/// "Talent Not Found" panel with a single Back action
#[component]
pub fn NotFoundPanel(on_back: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "max-w-md mx-auto px-6 py-16 text-center",
            div {
                class: "w-16 h-16 mx-auto mb-4 rounded-full bg-red-500/10 text-red-500 flex items-center justify-center",
                AlertTriangleIcon { class: "w-8 h-8" }
            }
            h1 {
                class: "text-2xl font-bold mb-2",
                "Talent Not Found"
            }
            p {
                class: "text-muted-foreground mb-6",
                "The talent you're looking for doesn't exist or has been removed."
            }
            button {
                class: "back-button px-6 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-full transition inline-flex items-center gap-2",
                onclick: move |e| on_back.call(e),
                ArrowLeftIcon { class: "w-4 h-4" }
                "Back"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness() -> Element {
        rsx! {
            NotFoundPanel { on_back: move |_| {} }
        }
    }

    #[test]
    fn test_renders_single_back_action() {
        let html = dioxus_ssr::render_element(rsx! { Harness {} });

        assert!(html.contains("Talent Not Found"));
        assert_eq!(html.matches("back-button").count(), 1);
        assert!(html.contains("Back"));
    }
}
