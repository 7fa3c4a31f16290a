//! Tag Components
//!
//! Small monospace labels, mostly used for HTTP methods next to endpoint
//! headings. The final class is assembled from three parts:
//! - a fixed base (mono font, 0.625rem, semibold, leading-6)
//! - the structural class of the [`TagVariant`]
//! - the color class for the ([`TagColor`], [`TagVariant`]) pair
//!
//! When no color is given, known methods pick their default color and
//! everything else falls back to [`TagColor::Sky`].

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::error::{Result, UiError};

/// Classes shared by every tag regardless of color or variant
pub const TAG_BASE_CLASS: &str = "font-mono text-[0.625rem] font-semibold leading-6";

/// Color treatment of a tag
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TagColor {
    #[default]
    Sky,
    Amber,
    Rose,
    Zinc,
}

impl TagColor {
    pub const ALL: [TagColor; 4] = [
        TagColor::Sky,
        TagColor::Amber,
        TagColor::Rose,
        TagColor::Zinc,
    ];

    /// Returns the color classes for this color at the given variant
    pub fn style(&self, variant: TagVariant) -> &'static str {
        match (self, variant) {
            (TagColor::Sky, TagVariant::Small) => "text-sky-500 dark:text-sky-400",
            (TagColor::Sky, TagVariant::Medium) => {
                "ring-sky-300 dark:ring-sky-400/30 bg-sky-400/10 text-sky-500 dark:text-sky-400"
            }
            (TagColor::Amber, TagVariant::Small) => "text-amber-500",
            (TagColor::Amber, TagVariant::Medium) => {
                "ring-amber-300 bg-amber-400/10 text-amber-500 dark:ring-amber-400/30 dark:bg-amber-400/10 dark:text-amber-400"
            }
            (TagColor::Rose, TagVariant::Small) => "text-red-500 dark:text-rose-500",
            (TagColor::Rose, TagVariant::Medium) => {
                "ring-rose-200 bg-rose-50 text-red-500 dark:ring-rose-500/20 dark:bg-rose-400/10 dark:text-rose-400"
            }
            (TagColor::Zinc, TagVariant::Small) => "text-zinc-400 dark:text-zinc-500",
            (TagColor::Zinc, TagVariant::Medium) => {
                "ring-zinc-200 bg-zinc-50 text-zinc-500 dark:ring-zinc-500/20 dark:bg-zinc-400/10 dark:text-zinc-400"
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagColor::Sky => "sky",
            TagColor::Amber => "amber",
            TagColor::Rose => "rose",
            TagColor::Zinc => "zinc",
        }
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagColor {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sky" => Ok(TagColor::Sky),
            "amber" => Ok(TagColor::Amber),
            "rose" => Ok(TagColor::Rose),
            "zinc" => Ok(TagColor::Zinc),
            _ => Err(UiError::UnknownColor(s.to_string())),
        }
    }
}

/// Sizing/shape treatment of a tag
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TagVariant {
    /// Bare colored text, used inline
    Small,
    /// Bordered pill with a tinted background
    #[default]
    Medium,
}

impl TagVariant {
    pub const ALL: [TagVariant; 2] = [TagVariant::Small, TagVariant::Medium];

    /// Returns the structural classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            TagVariant::Small => "",
            TagVariant::Medium => "rounded-lg px-1.5 ring-1 ring-inset",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagVariant::Small => "small",
            TagVariant::Medium => "medium",
        }
    }
}

impl fmt::Display for TagVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagVariant {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "small" => Ok(TagVariant::Small),
            "medium" => Ok(TagVariant::Medium),
            _ => Err(UiError::UnknownVariant(s.to_string())),
        }
    }
}

/// HTTP methods that carry a default tag color
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    /// The token as it appears in endpoint docs
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Color used for this method when the caller does not pick one
    pub fn default_color(&self) -> TagColor {
        match self {
            HttpMethod::Get | HttpMethod::Post => TagColor::Sky,
            HttpMethod::Put => TagColor::Amber,
            HttpMethod::Delete => TagColor::Rose,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an exact, upper-case method token.
impl FromStr for HttpMethod {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(UiError::UnknownMethod(s.to_string())),
        }
    }
}

/// Resolves the color for a label.
///
/// An explicit color always wins. Otherwise the label is looked up as a
/// method token, and anything unknown resolves to [`TagColor::Sky`].
pub fn resolve_color(label: &str, explicit: Option<TagColor>) -> TagColor {
    explicit
        .or_else(|| label.parse::<HttpMethod>().ok().map(|m| m.default_color()))
        .unwrap_or_default()
}

/// Builds the full class attribute for a resolved tag
pub fn tag_class(color: TagColor, variant: TagVariant) -> String {
    [TAG_BASE_CLASS, variant.class(), color.style(variant)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Properties for the Tag component
#[derive(Clone, PartialEq, Props)]
pub struct TagProps {
    /// Text shown in the tag, rendered verbatim
    pub label: String,
    /// Sizing variant
    #[props(default)]
    pub variant: TagVariant,
    /// Explicit color, overriding the method default
    #[props(default)]
    pub color: Option<TagColor>,
}

/// Text label colored by its HTTP method
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Tag { label: "DELETE".to_string() }                      // rose
///     Tag { label: "PATCH".to_string() }                       // sky
///     Tag { label: "GET".to_string(), color: TagColor::Zinc }  // zinc
/// }
/// ```
#[component]
pub fn Tag(props: TagProps) -> Element {
    let color = resolve_color(&props.label, props.color);
    let class = tag_class(color, props.variant);

    rsx! {
        span { class: "{class}", "{props.label}" }
    }
}

/// Properties for the MethodTag component
#[derive(Clone, PartialEq, Props)]
pub struct MethodTagProps {
    pub method: HttpMethod,
    #[props(default)]
    pub variant: TagVariant,
    #[props(default)]
    pub color: Option<TagColor>,
}

/// Tag for a typed HTTP method
#[component]
pub fn MethodTag(props: MethodTagProps) -> Element {
    let color = props.color.unwrap_or_else(|| props.method.default_color());
    let class = tag_class(color, props.variant);
    let label = props.method.as_str();

    rsx! {
        span { class: "{class}", "{label}" }
    }
}

/// Properties for the RichTag component
#[derive(Clone, PartialEq, Props)]
pub struct RichTagProps {
    /// Arbitrary tag content
    pub children: Element,
    #[props(default)]
    pub variant: TagVariant,
    /// Color of the tag; content cannot be looked up, so this defaults to sky
    #[props(default)]
    pub color: Option<TagColor>,
}

/// Tag wrapping arbitrary content (icons, formatted text)
#[component]
pub fn RichTag(props: RichTagProps) -> Element {
    let class = tag_class(props.color.unwrap_or_default(), props.variant);

    rsx! {
        span { class: "{class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn method_default_colors() {
        assert_eq!(resolve_color("GET", None), TagColor::Sky);
        assert_eq!(resolve_color("POST", None), TagColor::Sky);
        assert_eq!(resolve_color("PUT", None), TagColor::Amber);
        assert_eq!(resolve_color("DELETE", None), TagColor::Rose);
    }

    #[test]
    fn unknown_labels_fall_back_to_sky() {
        for label in ["PATCH", "get", "", "HEAD", " GET", "anything else"] {
            assert_eq!(resolve_color(label, None), TagColor::Sky, "label {label:?}");
        }
    }

    #[test]
    fn explicit_color_wins() {
        assert_eq!(resolve_color("GET", Some(TagColor::Zinc)), TagColor::Zinc);
        assert_eq!(resolve_color("DELETE", Some(TagColor::Sky)), TagColor::Sky);
        assert_eq!(
            resolve_color("PATCH", Some(TagColor::Amber)),
            TagColor::Amber
        );
    }

    #[test]
    fn every_pair_has_a_distinct_class() {
        let mut seen = HashSet::new();
        for color in TagColor::ALL {
            for variant in TagVariant::ALL {
                let class = tag_class(color, variant);
                assert!(!color.style(variant).is_empty());
                assert!(class.starts_with(TAG_BASE_CLASS));
                assert!(seen.insert(class), "{color}/{variant} duplicated");
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn small_variant_has_no_structural_class() {
        assert_eq!(
            tag_class(TagColor::Amber, TagVariant::Small),
            "font-mono text-[0.625rem] font-semibold leading-6 text-amber-500"
        );
        assert!(
            !tag_class(TagColor::Amber, TagVariant::Small).contains("  ")
        );
    }

    #[test]
    fn medium_variant_class() {
        assert_eq!(
            tag_class(TagColor::Rose, TagVariant::Medium),
            "font-mono text-[0.625rem] font-semibold leading-6 rounded-lg px-1.5 ring-1 ring-inset \
             ring-rose-200 bg-rose-50 text-red-500 dark:ring-rose-500/20 dark:bg-rose-400/10 dark:text-rose-400"
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(TagColor::default(), TagColor::Sky);
        assert_eq!(TagVariant::default(), TagVariant::Medium);
    }

    #[test]
    fn method_tokens_parse_exactly() {
        for method in HttpMethod::ALL {
            assert_eq!(method.as_str().parse::<HttpMethod>(), Ok(method));
        }
        assert_eq!(
            "Delete".parse::<HttpMethod>(),
            Err(UiError::UnknownMethod("Delete".to_string()))
        );
    }

    #[test]
    fn color_and_variant_parse_case_insensitively() {
        assert_eq!("Zinc".parse::<TagColor>(), Ok(TagColor::Zinc));
        assert_eq!("SMALL".parse::<TagVariant>(), Ok(TagVariant::Small));
        assert!("teal".parse::<TagColor>().is_err());
        assert!("large".parse::<TagVariant>().is_err());
    }
}
