use dioxus::prelude::*;
use crate::components::icons::{BriefcaseIcon, CalendarIcon, MapPinIcon};
use crate::stores::talent::ExperienceRecord;

/// Work history card
#[component]
pub fn ExperienceEntry(experiences: Vec<ExperienceRecord>) -> Element {
    rsx! {
        section {
            class: "bg-card border border-border rounded-xl p-6",
            h2 {
                class: "text-lg font-semibold mb-4 flex items-center gap-2",
                BriefcaseIcon { class: "w-5 h-5 text-blue-500" }
                "Experience"
            }

            if experiences.is_empty() {
                p {
                    class: "experience-empty text-sm text-muted-foreground",
                    "No experience listed yet."
                }
            } else {
                div {
                    class: "space-y-6",
                    for experience in experiences.iter() {
                        ExperienceItem { experience: experience.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceItem(experience: ExperienceRecord) -> Element {
    rsx! {
        div {
            class: "experience-item flex gap-4",
            div {
                class: "w-12 h-12 flex-shrink-0 rounded-lg bg-blue-500/10 text-blue-500 flex items-center justify-center",
                BriefcaseIcon { class: "w-6 h-6" }
            }
            div {
                class: "flex-1 min-w-0",
                h3 {
                    class: "font-semibold",
                    "{experience.role}"
                }
                p {
                    class: "text-muted-foreground",
                    "{experience.company}"
                }
                div {
                    class: "flex flex-wrap gap-4 mt-1 text-sm text-muted-foreground",
                    span {
                        class: "flex items-center gap-1",
                        CalendarIcon { class: "w-4 h-4" }
                        "{experience.period}"
                    }
                    if let Some(location) = &experience.location {
                        span {
                            class: "flex items-center gap-1",
                            MapPinIcon { class: "w-4 h-4" }
                            "{location}"
                        }
                    }
                }
                if !experience.description.is_empty() {
                    p {
                        class: "mt-2 text-sm",
                        "{experience.description}"
                    }
                }
            }
        }
    }
}
