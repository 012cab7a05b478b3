use dioxus::prelude::*;
use crate::components::icons::{BriefcaseIcon, MapPinIcon};
use crate::components::TalentAvatar;
use crate::routes::Route;
use crate::stores::config_store::AppConfig;
use crate::stores::talent::{TalentDirectory, TalentRecord};
use crate::utils::experience_years;

/// Listing of every talent in directory order
#[component]
pub fn Talents() -> Element {
    let directory = use_context::<TalentDirectory>();
    let config = use_context::<AppConfig>();

    rsx! {
        div {
            class: "max-w-5xl mx-auto px-4 py-8",
            h1 {
                class: "text-3xl font-bold mb-6",
                "Talents"
            }

            if directory.is_empty() {
                div {
                    class: "text-center py-12 text-muted-foreground",
                    "No talents available."
                }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for talent in directory.records().iter() {
                        TalentCard {
                            key: "{talent.id}",
                            talent: talent.clone(),
                            placeholder_base: config.avatar_placeholder_base.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TalentCard(talent: TalentRecord, placeholder_base: String) -> Element {
    let years = experience_years(&talent.experience_level);

    rsx! {
        Link {
            to: Route::TalentProfile { id: talent.id.to_string() },
            class: "bg-card border border-border rounded-xl p-4 flex gap-4 hover:bg-accent/30 transition",
            TalentAvatar {
                src: talent.avatar.clone(),
                name: talent.name.clone(),
                placeholder_base,
                class: "w-16 h-16".to_string(),
            }
            div {
                class: "min-w-0",
                h2 {
                    class: "font-semibold truncate",
                    "{talent.name}"
                }
                p {
                    class: "text-sm text-muted-foreground truncate",
                    "{talent.title}"
                }
                div {
                    class: "flex flex-wrap gap-3 mt-1 text-xs text-muted-foreground",
                    if !talent.location.is_empty() {
                        span {
                            class: "flex items-center gap-1",
                            MapPinIcon { class: "w-3 h-3" }
                            "{talent.location}"
                        }
                    }
                    span {
                        class: "flex items-center gap-1",
                        BriefcaseIcon { class: "w-3 h-3" }
                        "{years}"
                    }
                }
            }
        }
    }
}
