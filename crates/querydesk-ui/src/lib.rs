//! QueryDesk Docs UI Components
//!
//! This crate provides the Dioxus components used across the QueryDesk API
//! documentation site. Styling is expressed as Tailwind utility classes; the
//! site build compiles the stylesheet, so every class string emitted here is
//! part of the public contract.
//!
//! ## Components
//!
//! - [`Tag`], [`MethodTag`], [`RichTag`]: monospace labels colored by HTTP method
//! - [`Guides`]: the guide catalog rendered as a card grid
//! - [`Button`]: navigational link styled as a button, with optional arrow
//! - [`Heading`]: anchorable section heading with an optional eyebrow

pub mod components;
mod error;

pub use components::*;
pub use error::{Result, UiError};
