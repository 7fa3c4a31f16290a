//! Guides Component
//!
//! The guide catalog shown on the docs landing page: a heading followed by a
//! grid of cards, one per guide, each linking to the guide page.

use dioxus::prelude::*;
use serde::Serialize;

use crate::components::{Arrow, Button, ButtonVariant, Heading, HeadingLevel};

/// A single documentation guide
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct GuideEntry {
    pub href: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Guides in the order they appear on the page
pub const GUIDES: &[GuideEntry] = &[
    GuideEntry {
        href: "/guides/authentication",
        name: "Authentication",
        description: "Learn how to authenticate your API requests.",
    },
    GuideEntry {
        href: "/guides/terraform",
        name: "Terraform",
        description: "Learn how to manage your QueryDesk resources with Terraform.",
    },
    GuideEntry {
        href: "/guides/github-actions",
        name: "GitHub Actions",
        description: "Learn how to manage your QueryDesk resources with GitHub Actions.",
    },
    GuideEntry {
        href: "/guides/workflows",
        name: "Workflows",
        description: "Learn how to automate your processes with QueryDesk workflows.",
    },
];

/// Renders the guide catalog section
#[component]
pub fn Guides() -> Element {
    tracing::trace!(count = GUIDES.len(), "rendering guides");

    rsx! {
        div { class: "my-16 xl:max-w-none",
            Heading { level: HeadingLevel::H2, id: "guides".to_string(), "Guides" }
            div { class: "not-prose mt-4 grid grid-cols-1 gap-8 border-t border-zinc-900/5 pt-10 sm:grid-cols-2 xl:grid-cols-4 dark:border-white/5",
                for guide in GUIDES.iter() {
                    GuideCard { key: "{guide.href}", guide: *guide }
                }
            }
        }
    }
}

/// A single guide card
#[component]
pub fn GuideCard(guide: GuideEntry) -> Element {
    rsx! {
        div {
            h3 { class: "text-sm font-semibold text-zinc-900 dark:text-white", "{guide.name}" }
            p { class: "mt-1 text-sm text-zinc-600 dark:text-zinc-400", "{guide.description}" }
            p { class: "mt-4",
                Button {
                    href: guide.href.to_string(),
                    variant: ButtonVariant::Text,
                    arrow: Arrow::Right,
                    "Read more"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_order() {
        let names: Vec<_> = GUIDES.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            ["Authentication", "Terraform", "GitHub Actions", "Workflows"]
        );
    }

    #[test]
    fn hrefs_are_unique_guide_paths() {
        let hrefs: HashSet<_> = GUIDES.iter().map(|g| g.href).collect();
        assert_eq!(hrefs.len(), GUIDES.len());
        assert!(GUIDES.iter().all(|g| g.href.starts_with("/guides/")));
    }

    #[test]
    fn entry_serializes_with_field_names() {
        let value = serde_json::to_value(GUIDES[1]).unwrap();
        assert_eq!(value["href"], "/guides/terraform");
        assert_eq!(value["name"], "Terraform");
        assert_eq!(
            value["description"],
            "Learn how to manage your QueryDesk resources with Terraform."
        );
    }
}
