use dioxus::prelude::*;
use crate::utils::placeholder_avatar_url;

/// Pick the image source for an avatar
///
/// Blank URIs and URIs that already failed to load are replaced with the
/// initials placeholder.
pub fn avatar_src(primary: &str, name: &str, placeholder_base: &str, failed: bool) -> String {
    if failed || primary.trim().is_empty() {
        placeholder_avatar_url(placeholder_base, name)
    } else {
        primary.to_string()
    }
}

/// Whether the avatar currently shows the placeholder for `src`
pub fn is_failed(failed_src: Option<&str>, src: &str) -> bool {
    failed_src == Some(src)
}

/// URI to remember after a load error, or `None` when nothing should change
///
/// Only a primary URI is ever swapped. An error while the placeholder is
/// showing (already failed, or blank primary) leaves the state alone.
pub fn failure_to_record(failed_src: Option<&str>, src: &str) -> Option<String> {
    if is_failed(failed_src, src) || src.trim().is_empty() {
        None
    } else {
        Some(src.to_string())
    }
}

/// Talent avatar with a one-shot fallback to an initials placeholder
#[component]
pub fn TalentAvatar(
    src: String,
    name: String,
    placeholder_base: String,
    #[props(default = "w-32 h-32".to_string())] class: String,
) -> Element {
    // Remember which URI failed so a new `src` gets its own attempt
    let mut failed_src = use_signal(|| None::<String>);
    let failed = is_failed(failed_src.read().as_deref(), &src);
    let resolved = avatar_src(&src, &name, &placeholder_base, failed);
    let src_for_error = src.clone();
    let name_for_error = name.clone();

    rsx! {
        img {
            class: "{class} rounded-full object-cover bg-muted",
            src: "{resolved}",
            alt: "{name}",
            loading: "lazy",
            onerror: move |_| {
                let next = failure_to_record(failed_src.read().as_deref(), &src_for_error);
                if let Some(uri) = next {
                    log::debug!("Avatar failed to load for {}, using placeholder", name_for_error);
                    failed_src.set(Some(uri));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://ui-avatars.com/api/";

    #[test]
    fn test_primary_avatar_used_until_failure() {
        let src = avatar_src("https://cdn.example.com/ava.jpg", "Ava Lee", BASE, false);
        assert_eq!(src, "https://cdn.example.com/ava.jpg");
    }

    #[test]
    fn test_failed_avatar_uses_initials() {
        let src = avatar_src("https://unreachable.invalid/ava.jpg", "Ava Lee", BASE, true);
        assert!(src.starts_with(BASE));
        assert!(src.contains("name=AL"));
    }

    #[test]
    fn test_blank_avatar_uses_initials() {
        let src = avatar_src("", "Priya Raman", BASE, false);
        assert!(src.contains("name=PR"));
    }

    #[test]
    fn test_first_error_swaps_primary() {
        let recorded = failure_to_record(None, "https://unreachable.invalid/ava.jpg");
        assert_eq!(recorded.as_deref(), Some("https://unreachable.invalid/ava.jpg"));

        let failed = is_failed(recorded.as_deref(), "https://unreachable.invalid/ava.jpg");
        let src = avatar_src("https://unreachable.invalid/ava.jpg", "Ava Lee", BASE, failed);
        assert!(src.contains("name=AL"));
    }

    #[test]
    fn test_failing_placeholder_is_not_swapped_again() {
        let failed_src = Some("https://unreachable.invalid/ava.jpg");
        assert_eq!(failure_to_record(failed_src, "https://unreachable.invalid/ava.jpg"), None);

        // Blank primary already shows the placeholder
        assert_eq!(failure_to_record(None, ""), None);
        assert_eq!(failure_to_record(None, "   "), None);
    }

    #[test]
    fn test_new_src_gets_its_own_attempt() {
        let failed_src = Some("https://unreachable.invalid/ava.jpg");
        let next = "https://cdn.example.com/marcus.jpg";

        assert!(!is_failed(failed_src, next));
        assert_eq!(avatar_src(next, "Marcus Johnson", BASE, is_failed(failed_src, next)), next);
        assert_eq!(failure_to_record(failed_src, next).as_deref(), Some(next));
    }

    #[test]
    fn test_renders_primary_src() {
        let html = dioxus_ssr::render_element(rsx! {
            TalentAvatar {
                src: "https://cdn.example.com/ava.jpg".to_string(),
                name: "Ava Lee".to_string(),
                placeholder_base: BASE.to_string(),
            }
        });

        assert!(html.contains("https://cdn.example.com/ava.jpg"));
        assert!(html.contains("alt=\"Ava Lee\""));
    }
}
