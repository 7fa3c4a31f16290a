//! Button Components
//!
//! Navigation links styled as buttons:
//! - Primary: dark pill, emerald tint in dark mode
//! - Secondary: light zinc pill
//! - Filled: solid emerald in dark mode
//! - Outline: ring only
//! - Text: bare emerald text, used for "Read more" links

use dioxus::prelude::*;

const BUTTON_BASE_CLASS: &str =
    "inline-flex gap-0.5 justify-center overflow-hidden text-sm font-medium transition";

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Filled,
    Outline,
    Text,
}

impl ButtonVariant {
    /// Returns the CSS classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "rounded-full bg-zinc-900 py-1 px-3 text-white hover:bg-zinc-700 dark:bg-emerald-400/10 dark:text-emerald-400 dark:ring-1 dark:ring-inset dark:ring-emerald-400/20 dark:hover:bg-emerald-400/10 dark:hover:text-emerald-300 dark:hover:ring-emerald-300"
            }
            ButtonVariant::Secondary => {
                "rounded-full bg-zinc-100 py-1 px-3 text-zinc-900 hover:bg-zinc-200 dark:bg-zinc-800/40 dark:text-zinc-400 dark:ring-1 dark:ring-inset dark:ring-zinc-800 dark:hover:bg-zinc-800 dark:hover:text-zinc-300"
            }
            ButtonVariant::Filled => {
                "rounded-full bg-zinc-900 py-1 px-3 text-white hover:bg-zinc-700 dark:bg-emerald-500 dark:text-white dark:hover:bg-emerald-400"
            }
            ButtonVariant::Outline => {
                "rounded-full py-1 px-3 text-zinc-700 ring-1 ring-inset ring-zinc-900/10 hover:bg-zinc-900/2.5 hover:text-zinc-900 dark:text-zinc-400 dark:ring-white/10 dark:hover:bg-white/5 dark:hover:text-white"
            }
            ButtonVariant::Text => {
                "text-emerald-500 hover:text-emerald-600 dark:text-emerald-400 dark:hover:text-emerald-500"
            }
        }
    }
}

/// Direction of the arrow icon drawn next to the button content
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arrow {
    Left,
    Right,
}

impl Arrow {
    fn class(&self) -> &'static str {
        match self {
            Arrow::Left => "-ml-1 rotate-180",
            Arrow::Right => "-mr-1",
        }
    }
}

/// Class attribute for the arrow icon
pub fn arrow_icon_class(arrow: Arrow, variant: ButtonVariant) -> String {
    let mut class = String::from("mt-0.5 h-5 w-5");
    if variant == ButtonVariant::Text {
        class.push_str(" relative top-px");
    }
    class.push(' ');
    class.push_str(arrow.class());
    class
}

/// Class attribute for the button itself
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {} {}", BUTTON_BASE_CLASS, variant.class(), extra),
        None => format!("{} {}", BUTTON_BASE_CLASS, variant.class()),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Destination of the link
    pub href: String,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Optional arrow drawn before (left) or after (right) the content
    #[props(default)]
    pub arrow: Option<Arrow>,
    /// Button content
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Link rendered as a button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         href: "/guides/authentication".to_string(),
///         variant: ButtonVariant::Text,
///         arrow: Arrow::Right,
///         "Read more"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());
    let left = props.arrow == Some(Arrow::Left);
    let right = props.arrow == Some(Arrow::Right);
    let variant = props.variant;

    rsx! {
        a { class: "{full_class}", href: "{props.href}",
            if left {
                ArrowIcon { class: arrow_icon_class(Arrow::Left, variant) }
            }
            {props.children}
            if right {
                ArrowIcon { class: arrow_icon_class(Arrow::Right, variant) }
            }
        }
    }
}

#[component]
fn ArrowIcon(class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 20 20",
            fill: "none",
            "aria-hidden": "true",
            path {
                stroke: "currentColor",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "m11.5 6.5 3 3.5m0 0-3 3.5m3-3.5h-10",
            }
        }
    }
}
