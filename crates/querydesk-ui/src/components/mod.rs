//! Reusable documentation components
//!
//! Tailwind class strings follow the site's zinc/emerald palette with
//! `dark:` variants for the dark theme.

mod button;
mod guides;
mod heading;
mod tag;

pub use button::*;
pub use guides::*;
pub use heading::*;
pub use tag::*;
