use dioxus::prelude::*;

pub mod talents;
pub mod talent_profile;
pub mod not_found;

use talents::Talents;
use talent_profile::TalentProfile;
use not_found::PageNotFound;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Talents {},

        #[route("/talents/:id")]
        TalentProfile { id: String },

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();
    let is_listing_page = matches!(current_route, Route::Talents {});

    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",

            header {
                class: "sticky top-0 z-20 bg-background/80 backdrop-blur border-b border-border",
                div {
                    class: "max-w-5xl mx-auto px-4 h-14 flex items-center justify-between",
                    Link {
                        to: Route::Talents {},
                        class: "flex items-center gap-2 hover:opacity-80 transition",
                        div {
                            class: "w-9 h-9 bg-blue-500 rounded-full flex items-center justify-center text-white font-bold",
                            "T"
                        }
                        span {
                            class: "text-lg font-bold",
                            "Talentboard"
                        }
                    }
                    if !is_listing_page {
                        Link {
                            to: Route::Talents {},
                            class: "text-sm text-muted-foreground hover:underline",
                            "All talents"
                        }
                    }
                }
            }

            main {
                Outlet::<Route> {}
            }

            footer {
                class: "text-xs text-muted-foreground text-center py-8",
                "Talentboard - {env!(\"CARGO_PKG_VERSION\")}"
            }
        }
    }
}
