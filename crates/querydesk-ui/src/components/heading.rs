//! Heading Component
//!
//! Section headings that can be linked to by id. An optional eyebrow row
//! above the heading shows a method [`Tag`] and/or a monospace label such as
//! an endpoint path.

use dioxus::prelude::*;

use crate::components::Tag;
use crate::error::UiError;

/// Supported heading levels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeadingLevel {
    #[default]
    H2,
    H3,
}

impl TryFrom<u8> for HeadingLevel {
    type Error = UiError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(UiError::UnsupportedHeadingLevel(other)),
        }
    }
}

/// Class of the heading element, which needs extra scroll margin when an
/// eyebrow sits above it
pub fn heading_class(has_eyebrow: bool) -> &'static str {
    if has_eyebrow {
        "mt-2 scroll-mt-32"
    } else {
        "scroll-mt-24"
    }
}

/// Properties for the Heading component
#[derive(Clone, PartialEq, Props)]
pub struct HeadingProps {
    #[props(default)]
    pub level: HeadingLevel,
    /// Fragment id; also the anchor target
    pub id: String,
    /// Tag label shown in the eyebrow (typically an HTTP method)
    #[props(default)]
    pub tag: Option<String>,
    /// Monospace label shown in the eyebrow (typically a path)
    #[props(default)]
    pub label: Option<String>,
    /// Wrap the content in a link to `#id`
    #[props(default = true)]
    pub anchor: bool,
    pub children: Element,
}

/// Anchorable section heading
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Heading {
///         id: "delete-a-query".to_string(),
///         tag: "DELETE".to_string(),
///         label: "/v1/queries/:id".to_string(),
///         "Delete a query"
///     }
/// }
/// ```
#[component]
pub fn Heading(props: HeadingProps) -> Element {
    let class = heading_class(props.tag.is_some() || props.label.is_some());
    let content = if props.anchor {
        rsx! {
            Anchor { id: props.id.clone(), {props.children} }
        }
    } else {
        props.children
    };
    let heading = match props.level {
        HeadingLevel::H2 => rsx! {
            h2 { id: "{props.id}", class: "{class}", {content} }
        },
        HeadingLevel::H3 => rsx! {
            h3 { id: "{props.id}", class: "{class}", {content} }
        },
    };

    rsx! {
        {eyebrow(props.tag.as_deref(), props.label.as_deref())}
        {heading}
    }
}

fn eyebrow(tag: Option<&str>, label: Option<&str>) -> Element {
    if tag.is_none() && label.is_none() {
        return rsx! {};
    }
    let separator = tag.is_some() && label.is_some();

    rsx! {
        div { class: "flex items-center gap-x-3",
            if let Some(tag) = tag {
                Tag { label: tag.to_string() }
            }
            if separator {
                span { class: "h-0.5 w-0.5 rounded-full bg-zinc-300 dark:bg-zinc-600" }
            }
            if let Some(label) = label {
                span { class: "font-mono text-xs text-zinc-400", "{label}" }
            }
        }
    }
}

#[component]
fn Anchor(id: String, children: Element) -> Element {
    rsx! {
        a {
            class: "group text-inherit no-underline hover:text-inherit",
            href: "#{id}",
            span { class: "absolute -ml-10 mt-1 hidden w-10 opacity-0 transition group-hover:opacity-100 group-focus:opacity-100 md:block",
                span { class: "block h-5 w-5 rounded-lg bg-zinc-50 ring-1 ring-zinc-300 ring-inset transition hover:ring-zinc-500 dark:bg-zinc-800 dark:ring-zinc-700 dark:hover:bg-zinc-700 dark:hover:ring-zinc-600",
                    svg {
                        class: "h-5 w-5 stroke-zinc-500 transition dark:stroke-zinc-400",
                        view_box: "0 0 20 20",
                        fill: "none",
                        "aria-hidden": "true",
                        path {
                            stroke_linecap: "round",
                            d: "m6.5 11.5-.964-.964a3.535 3.535 0 1 1 5-5l.964.964m2 2 .964.964a3.535 3.535 0 0 1-5 5l-.964-.964m-1.5-1.5 4-4",
                        }
                    }
                }
            }
            {children}
        }
    }
}
