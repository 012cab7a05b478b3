use dioxus::prelude::*;
use crate::components::icons::{
    BookmarkIcon, BriefcaseIcon, DollarSignIcon, MailIcon, MapPinIcon, MessageCircleIcon,
    ShareIcon, TrendingUpIcon, UserPlusIcon, UsersIcon,
};
use crate::components::{CertificateList, ExperienceEntry, TalentAvatar};
use crate::stores::config_store::AppConfig;
use crate::stores::talent::TalentRecord;
use crate::utils::{experience_years, split_skills};

// Stat tiles are decorative and not derived from the record
const PROJECTS_STAT: &str = "48";
const FOLLOWERS_STAT: &str = "1.2k";
const SUCCESS_RATE_STAT: &str = "98%";

/// Full profile for one talent
#[component]
pub fn ProfileView(talent: TalentRecord, config: AppConfig) -> Element {
    let years = experience_years(&talent.experience_level);
    let (visible_skills, hidden_skills) = split_skills(&talent.skills, config.max_visible_skills);
    let talent_id = talent.id;

    rsx! {
        div {
            class: "max-w-5xl mx-auto px-4 py-8 space-y-6",

            // Header card
            section {
                class: "bg-card border border-border rounded-xl overflow-hidden",

                ProfileBanner { src: config.banner_url.clone() }

                div {
                    class: "px-6 pb-6",
                    div {
                        class: "flex flex-col md:flex-row md:items-end gap-4 -mt-16",
                        TalentAvatar {
                            src: talent.avatar.clone(),
                            name: talent.name.clone(),
                            placeholder_base: config.avatar_placeholder_base.clone(),
                            class: "w-32 h-32 border-4 border-background".to_string(),
                        }

                        div {
                            class: "flex-1 min-w-0",
                            h1 {
                                class: "text-2xl font-bold",
                                "{talent.name}"
                            }
                            p {
                                class: "text-muted-foreground",
                                "{talent.title}"
                            }
                            div {
                                class: "flex flex-wrap gap-4 mt-2 text-sm text-muted-foreground",
                                if !talent.location.is_empty() {
                                    span {
                                        class: "flex items-center gap-1",
                                        MapPinIcon { class: "w-4 h-4" }
                                        "{talent.location}"
                                    }
                                }
                                span {
                                    class: "experience-years flex items-center gap-1",
                                    BriefcaseIcon { class: "w-4 h-4" }
                                    "{years}"
                                }
                            }
                        }

                        // Action affordances, presentational only
                        div {
                            class: "flex gap-2",
                            button {
                                class: "px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-full transition flex items-center gap-2",
                                onclick: move |_| log::debug!("Connect pressed for talent {}", talent_id),
                                UserPlusIcon { class: "w-4 h-4" }
                                "Connect"
                            }
                            button {
                                class: "px-4 py-2 border border-border hover:bg-accent rounded-full transition flex items-center gap-2",
                                onclick: move |_| log::debug!("Message pressed for talent {}", talent_id),
                                MessageCircleIcon { class: "w-4 h-4" }
                                "Message"
                            }
                            button {
                                class: "p-2 border border-border hover:bg-accent rounded-full transition",
                                title: "Bookmark",
                                onclick: move |_| log::debug!("Bookmark pressed for talent {}", talent_id),
                                BookmarkIcon { class: "w-4 h-4" }
                            }
                            button {
                                class: "p-2 border border-border hover:bg-accent rounded-full transition",
                                title: "Share",
                                onclick: move |_| log::debug!("Share pressed for talent {}", talent_id),
                                ShareIcon { class: "w-4 h-4" }
                            }
                        }
                    }

                    // Stats
                    div {
                        class: "grid grid-cols-3 gap-4 mt-6",
                        StatTile { value: PROJECTS_STAT, label: "Projects" }
                        StatTile { value: FOLLOWERS_STAT, label: "Followers" }
                        StatTile { value: SUCCESS_RATE_STAT, label: "Success Rate" }
                    }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",

                div {
                    class: "lg:col-span-2 space-y-6",

                    section {
                        class: "bg-card border border-border rounded-xl p-6",
                        h2 {
                            class: "text-lg font-semibold mb-3 flex items-center gap-2",
                            UsersIcon { class: "w-5 h-5 text-blue-500" }
                            "About"
                        }
                        if talent.description.is_empty() {
                            p {
                                class: "text-muted-foreground",
                                "No bio provided."
                            }
                        } else {
                            p {
                                class: "whitespace-pre-wrap",
                                "{talent.description}"
                            }
                        }
                    }

                    ExperienceEntry { experiences: talent.experiences.clone() }
                    CertificateList { certificates: talent.certificates.clone() }
                }

                div {
                    class: "space-y-6",

                    section {
                        class: "bg-card border border-border rounded-xl p-6",
                        h2 {
                            class: "text-lg font-semibold mb-3 flex items-center gap-2",
                            TrendingUpIcon { class: "w-5 h-5 text-blue-500" }
                            "Skills"
                        }
                        if visible_skills.is_empty() {
                            p {
                                class: "text-sm text-muted-foreground",
                                "No skills listed."
                            }
                        } else {
                            div {
                                class: "flex flex-wrap gap-2",
                                for skill in visible_skills.iter() {
                                    span {
                                        class: "skill-chip px-3 py-1 bg-blue-500/10 text-blue-600 dark:text-blue-400 rounded-full text-sm",
                                        "{skill}"
                                    }
                                }
                                if hidden_skills > 0 {
                                    span {
                                        class: "skill-overflow px-3 py-1 bg-muted text-muted-foreground rounded-full text-sm",
                                        "+{hidden_skills} more"
                                    }
                                }
                            }
                        }
                    }

                    section {
                        class: "bg-card border border-border rounded-xl p-6",
                        h2 {
                            class: "text-lg font-semibold mb-3 flex items-center gap-2",
                            DollarSignIcon { class: "w-5 h-5 text-blue-500" }
                            "Expected Salary"
                        }
                        p {
                            class: "text-xl font-bold",
                            if talent.expected_salary.is_empty() {
                                "Negotiable"
                            } else {
                                "{talent.expected_salary}"
                            }
                        }
                        button {
                            class: "w-full mt-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-full transition flex items-center justify-center gap-2",
                            onclick: move |_| log::debug!("Contact pressed for talent {}", talent_id),
                            MailIcon { class: "w-4 h-4" }
                            "Contact"
                        }
                    }
                }
            }
        }
    }
}

/// Decorative banner; falls back to a gradient when the image fails
#[component]
fn ProfileBanner(src: String) -> Element {
    let mut failed = use_signal(|| false);

    rsx! {
        if *failed.read() || src.is_empty() {
            div {
                class: "h-40 w-full bg-gradient-to-r from-blue-500 to-indigo-600"
            }
        } else {
            img {
                class: "h-40 w-full object-cover",
                src: "{src}",
                alt: "Profile banner",
                onerror: move |_| {
                    log::debug!("Banner failed to load, using gradient");
                    failed.set(true);
                }
            }
        }
    }
}

#[component]
fn StatTile(value: &'static str, label: &'static str) -> Element {
    rsx! {
        div {
            class: "text-center p-3 rounded-lg bg-accent/30",
            div {
                class: "text-xl font-bold",
                "{value}"
            }
            div {
                class: "text-xs text-muted-foreground",
                "{label}"
            }
        }
    }
}
