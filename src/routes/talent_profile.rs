use dioxus::prelude::*;
use crate::components::{NotFoundPanel, ProfileView};
use crate::routes::Route;
use crate::stores::config_store::AppConfig;
use crate::stores::talent::{TalentDirectory, TalentRecord};
use crate::utils::LookupState;

/// Resolve the `:id` route parameter against the directory
pub fn resolve_talent(directory: &TalentDirectory, raw_id: &str) -> LookupState<TalentRecord> {
    LookupState::resolve(|| directory.find(raw_id).cloned())
}

#[component]
pub fn TalentProfile(id: String) -> Element {
    let directory = use_context::<TalentDirectory>();
    let config = use_context::<AppConfig>();
    let navigator = navigator();

    match resolve_talent(&directory, &id) {
        LookupState::Found(talent) => {
            log::debug!("Rendering profile for talent {}", talent.id);
            rsx! {
                ProfileView { talent, config }
            }
        }
        LookupState::NotFound => {
            log::debug!("No talent matches id {:?}", id);
            rsx! {
                NotFoundPanel {
                    on_back: move |_| {
                        navigator.push(Route::Talents {});
                    }
                }
            }
        }
        LookupState::Resolving => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVA_DIRECTORY: &str = r#"[
        {
            "id": 1,
            "name": "Ava Lee",
            "title": "Engineer",
            "experienceLevel": "senior",
            "skills": ["Go", "Rust", "SQL", "Python", "C++", "TS", "Java"]
        }
    ]"#;

    #[test]
    fn test_resolves_known_talent() {
        let directory = TalentDirectory::from_json(AVA_DIRECTORY).unwrap();
        let state = resolve_talent(&directory, "1");

        let talent = state.found().unwrap();
        assert_eq!(talent.name, "Ava Lee");
        assert_eq!(talent.skills.len(), 7);
    }

    #[test]
    fn test_empty_directory_is_not_found() {
        let directory = TalentDirectory::from_json("[]").unwrap();
        assert!(resolve_talent(&directory, "42").is_not_found());
    }

    #[test]
    fn test_invalid_ids_are_not_found() {
        let directory = TalentDirectory::from_json(AVA_DIRECTORY).unwrap();

        for raw in ["", "0", "not-a-number", "-1", "2"] {
            assert!(resolve_talent(&directory, raw).is_not_found(), "id {:?}", raw);
        }
    }
}
