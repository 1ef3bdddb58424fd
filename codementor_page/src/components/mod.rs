//! Leptos UI components for the landing page.
//!
//! Each section is a `#[component]` rendered server-side to static HTML.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingPage
//! ├── Nav
//! ├── main
//! │   ├── Hero               (entrance animation)
//! │   ├── FeatureGrid
//! │   │   └── FeatureCard ×6 (staggered entrance)
//! │   ├── StatsBanner
//! │   └── CallToActionBlock
//! └── Footer
//! ```
//!
//! # Usage
//!
//! Components are normally rendered through [`crate::render_landing`], but
//! can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use codementor_page::components::{FeatureGrid, StatsBanner};
//!
//! view! {
//!     <FeatureGrid animations=false />
//!     <StatsBanner />
//! }
//! ```

mod button;
mod cta;
mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod nav;
mod stats;

pub use button::ActionButton;
pub use cta::CallToActionBlock;
pub use document::LandingPage;
pub use features::{FeatureCard, FeatureGrid};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{HeroIcon, IconGlyph};
pub use nav::Nav;
pub use stats::StatsBanner;

use crate::motion::EntranceAnimation;

/// Class list for a block that may carry the `enter` animation.
pub(crate) fn enter_class(base: &'static str, motion: Option<EntranceAnimation>) -> String {
    match motion {
        Some(_) => format!("{base} enter"),
        None => base.to_string(),
    }
}

/// Inline timing for an animated block; `None` leaves `style` off entirely.
pub(crate) fn enter_style(motion: Option<EntranceAnimation>) -> Option<String> {
    motion.map(|m| m.inline_style())
}
