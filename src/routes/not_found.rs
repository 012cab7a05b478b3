use dioxus::prelude::*;
use crate::components::NotFoundPanel;
use crate::routes::Route;

/// Catch-all for unknown paths, including `/talents/` without an id
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let navigator = navigator();
    log::debug!("Unknown route /{}", segments.join("/"));

    rsx! {
        NotFoundPanel {
            on_back: move |_| {
                navigator.push(Route::Talents {});
            }
        }
    }
}
