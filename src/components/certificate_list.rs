use dioxus::prelude::*;
use crate::components::icons::{AwardIcon, ExternalLinkIcon};
use crate::stores::talent::CertificateRecord;

/// Certifications card
#[component]
pub fn CertificateList(certificates: Vec<CertificateRecord>) -> Element {
    rsx! {
        section {
            class: "bg-card border border-border rounded-xl p-6",
            h2 {
                class: "text-lg font-semibold mb-4 flex items-center gap-2",
                AwardIcon { class: "w-5 h-5 text-blue-500" }
                "Certificates"
            }

            if certificates.is_empty() {
                p {
                    class: "text-sm text-muted-foreground",
                    "No certificates listed yet."
                }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for certificate in certificates.iter() {
                        div {
                            class: "certificate-item border border-border rounded-lg p-4 flex gap-3",
                            div {
                                class: "w-10 h-10 flex-shrink-0 rounded-full bg-amber-500/10 text-amber-500 flex items-center justify-center",
                                AwardIcon { class: "w-5 h-5" }
                            }
                            div {
                                class: "min-w-0",
                                h3 {
                                    class: "font-medium",
                                    "{certificate.name}"
                                }
                                p {
                                    class: "text-sm text-muted-foreground",
                                    "{certificate.issuer} · {certificate.issued}"
                                }
                                if let Some(url) = &certificate.credential_url {
                                    a {
                                        href: "{url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "text-sm text-blue-500 hover:underline inline-flex items-center gap-1 mt-1",
                                        "View credential"
                                        ExternalLinkIcon { class: "w-3 h-3" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_certificates() {
        let certificates = vec![
            CertificateRecord {
                name: "AWS Certified Solutions Architect".to_string(),
                issuer: "Amazon Web Services".to_string(),
                issued: "2023".to_string(),
                credential_url: Some("https://aws.amazon.com/certification/".to_string()),
            },
            CertificateRecord {
                name: "Certified Kubernetes Administrator".to_string(),
                issuer: "CNCF".to_string(),
                issued: "2022".to_string(),
                credential_url: None,
            },
        ];

        let html = dioxus_ssr::render_element(rsx! { CertificateList { certificates } });

        assert_eq!(html.matches("certificate-item").count(), 2);
        assert!(html.contains("Certified Kubernetes Administrator"));
        assert_eq!(html.matches("View credential").count(), 1);
    }

    #[test]
    fn test_empty_list_shows_message() {
        let html = dioxus_ssr::render_element(rsx! { CertificateList { certificates: Vec::new() } });
        assert!(html.contains("No certificates listed yet."));
    }
}
