//! Server-side rendering of documentation fragments.

#![allow(non_snake_case)]

use std::str::FromStr;

use clap::Subcommand;
use dioxus::prelude::*;
use querydesk_ui::{
    tag_class, Guides, Heading, HeadingLevel, HeadingProps, HttpMethod, MethodTag, Tag, TagColor,
    TagProps, TagVariant,
};

/// Fragments the CLI knows how to render
#[derive(Clone, PartialEq, Eq, Debug, Subcommand)]
pub enum Section {
    /// Guide catalog card grid
    Guides,
    /// Reference sheet of every tag color and variant
    Tags,
    /// A single tag
    Tag {
        /// Tag text; GET, POST, PUT and DELETE pick their own color
        label: String,

        /// Explicit color (sky, amber, rose, zinc)
        #[arg(long, value_parser = TagColor::from_str)]
        color: Option<TagColor>,

        /// Sizing variant (small, medium)
        #[arg(long, value_parser = TagVariant::from_str)]
        variant: Option<TagVariant>,
    },
    /// A single section heading
    Heading {
        /// Fragment id of the heading
        id: String,

        /// Heading text
        text: String,

        /// Heading level (2 or 3)
        #[arg(long, value_parser = parse_heading_level)]
        level: Option<HeadingLevel>,

        /// Tag shown above the heading
        #[arg(long)]
        tag: Option<String>,

        /// Label shown above the heading
        #[arg(long)]
        label: Option<String>,
    },
}

fn parse_heading_level(s: &str) -> Result<HeadingLevel, String> {
    let level: u8 = s.parse().map_err(|e| format!("'{}' is not a number: {}", s, e))?;
    HeadingLevel::try_from(level).map_err(|e| e.to_string())
}

/// Renders a fragment to an HTML string.
///
/// With `dark` set the fragment is wrapped in a `dark` container so the
/// `dark:` utility classes apply.
pub fn render_fragment(section: &Section, dark: bool) -> String {
    let mut dom = match section {
        Section::Guides => VirtualDom::new(Guides),
        Section::Tags => VirtualDom::new(TagSheet),
        Section::Tag {
            label,
            color,
            variant,
        } => VirtualDom::new_with_props(
            Tag,
            TagProps {
                label: label.clone(),
                variant: variant.unwrap_or_default(),
                color: *color,
            },
        ),
        Section::Heading {
            id,
            text,
            level,
            tag,
            label,
        } => VirtualDom::new_with_props(
            HeadingPreview,
            HeadingPreviewProps {
                level: level.unwrap_or_default(),
                id: id.clone(),
                text: text.clone(),
                tag: tag.clone(),
                label: label.clone(),
            },
        ),
    };
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    tracing::debug!(?section, bytes = html.len(), "rendered fragment");

    if dark {
        format!("<div class=\"dark\">{}</div>", html)
    } else {
        html
    }
}

#[derive(Clone, PartialEq, Props)]
struct HeadingPreviewProps {
    level: HeadingLevel,
    id: String,
    text: String,
    tag: Option<String>,
    label: Option<String>,
}

#[component]
fn HeadingPreview(props: HeadingPreviewProps) -> Element {
    Heading(HeadingProps {
        level: props.level,
        id: props.id,
        tag: props.tag,
        label: props.label,
        anchor: true,
        children: rsx! { "{props.text}" },
    })
}

#[component]
fn TagSheet() -> Element {
    rsx! {
        div { class: "my-16 xl:max-w-none",
            Heading { level: HeadingLevel::H2, id: "tags".to_string(), "Tags" }
            table { class: "not-prose mt-4 w-full text-left text-sm",
                thead {
                    tr {
                        th { "color" }
                        for variant in TagVariant::ALL {
                            th { "{variant}" }
                        }
                    }
                }
                tbody {
                    for color in TagColor::ALL {
                        tr { key: "{color}",
                            td { class: "font-mono text-xs text-zinc-400", "{color}" }
                            for variant in TagVariant::ALL {
                                td { title: tag_class(color, variant),
                                    Tag { label: color.to_string(), variant, color }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "mt-6 flex items-center gap-x-3",
                for method in HttpMethod::ALL {
                    MethodTag { key: "{method}", method }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_tag(label: &str, color: Option<TagColor>, variant: Option<TagVariant>) -> String {
        render_fragment(
            &Section::Tag {
                label: label.to_string(),
                color,
                variant,
            },
            false,
        )
    }

    #[test]
    fn guides_fragment_lists_every_guide() {
        let html = render_fragment(&Section::Guides, false);
        for guide in querydesk_ui::GUIDES {
            assert!(html.contains(guide.href));
        }
        assert!(!html.starts_with("<div class=\"dark\">"));
    }

    #[test]
    fn tags_fragment_covers_every_combination() {
        let html = render_fragment(&Section::Tags, false);
        for color in TagColor::ALL {
            for variant in TagVariant::ALL {
                assert!(
                    html.contains(&tag_class(color, variant)),
                    "{color}/{variant}"
                );
            }
        }
        for method in HttpMethod::ALL {
            assert!(html.contains(&format!(">{}</span>", method)));
        }
    }

    #[test]
    fn dark_wraps_fragment() {
        let html = render_fragment(&Section::Guides, true);
        assert!(html.starts_with("<div class=\"dark\">"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn single_tag_resolves_color() {
        let html = single_tag("DELETE", None, None);
        assert!(
            html.contains(&tag_class(TagColor::Rose, TagVariant::Medium))
        );

        let html = single_tag("GET", Some(TagColor::Zinc), Some(TagVariant::Small));
        assert!(html.contains(&tag_class(TagColor::Zinc, TagVariant::Small)));
        assert!(html.contains(">GET</span>"));
    }

    #[test]
    fn heading_fragment_uses_level_and_eyebrow() {
        let html = render_fragment(
            &Section::Heading {
                id: "create-a-query".to_string(),
                text: "Create a query".to_string(),
                level: Some(HeadingLevel::H3),
                tag: Some("POST".to_string()),
                label: None,
            },
            false,
        );
        assert!(html.contains("<h3"), "{html}");
        assert!(html.contains("id=\"create-a-query\""));
        assert!(html.contains(&tag_class(TagColor::Sky, TagVariant::Medium)));
        assert!(html.contains("Create a query"));
    }

    #[test]
    fn heading_level_parser() {
        assert_eq!(parse_heading_level("2"), Ok(HeadingLevel::H2));
        assert_eq!(parse_heading_level("3"), Ok(HeadingLevel::H3));
        assert_eq!(
            parse_heading_level("4"),
            Err("Unsupported heading level: 4".to_string())
        );
        assert!(parse_heading_level("two").is_err());
    }
}
