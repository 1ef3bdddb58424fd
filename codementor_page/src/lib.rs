//! # codementor-page
//!
//! Leptos SSR renderer for the CodeMentor AI landing page.
//!
//! The page is a single self-contained HTML document: navigation bar, hero,
//! feature grid, stats banner, call-to-action and footer. Styles are inlined
//! and the entrance animations are pure CSS, so the output needs no script
//! and no hydration.
//!
//! ## Quick Start
//!
//! ```rust
//! use codementor_page::render_landing;
//!
//! let html = render_landing();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("CodeMentor AI - 智能编程导师"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - literal copy and the feature/stat/footer tables
//! - [`components`] - Leptos UI components, one per page section
//! - [`motion`] - entrance animation timing
//! - [`manifest`] - serde snapshot of the content for JSON export
//! - [`styles`] - CSS and Content-Security-Policy constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <LandingPage /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod manifest;
pub mod motion;
pub mod styles;

use components::LandingPage;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use manifest::{manifest, PageManifest};

/// Document-level rendering options.
///
/// None of these touch the page copy: title, description and content are
/// fixed.
///
/// # Example
///
/// ```rust
/// use codementor_page::{render_landing_page, PageOptions};
///
/// let options = PageOptions {
///     animations: false,
///     ..Default::default()
/// };
/// let html = render_landing_page(&options);
/// assert!(!html.contains("animation-delay"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// `href` of the favicon link
    pub favicon_href: String,
    /// Play the entrance animations; `false` renders every block at rest
    pub animations: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            lang: "zh-CN".into(),
            favicon_href: "/favicon.ico".into(),
            animations: true,
        }
    }
}

/// Render the landing page with default options.
///
/// Output is deterministic: two calls return identical strings.
pub fn render_landing() -> String {
    render_landing_page(&PageOptions::default())
}

/// Render the complete landing page document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_landing_page(options: &PageOptions) -> String {
    let doc = view! { <LandingPage options=options.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CALLS_TO_ACTION, FEATURES, FOOTER_GROUPS, STATS};
    use pretty_assertions::assert_eq;

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
    }

    fn card_delays(html: &str) -> Vec<u32> {
        html.split("class=\"feature-card enter\"")
            .skip(1)
            .filter_map(|chunk| {
                let rest = &chunk[chunk.find("animation-delay:")? + "animation-delay:".len()..];
                rest[..rest.find("ms")?].parse().ok()
            })
            .collect()
    }

    #[test]
    fn renders_document_head() {
        let html = render_landing();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("lang=\"zh-CN\""));
        assert!(html.contains("<title>CodeMentor AI - 智能编程导师</title>"));
        assert!(html.contains("name=\"description\""));
        assert!(html.contains("content=\"基于AI的个性化编程学习平台\""));
        assert!(html.contains("href=\"/favicon.ico\""));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn renders_features_in_order() {
        let html = render_landing();
        // The hero lead mentions feature titles too; only the grid counts.
        let grid = &html[position(&html, "id=\"features\"")..];

        let positions: Vec<usize> = FEATURES.iter().map(|f| position(grid, f.title)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        for feature in &FEATURES {
            assert!(grid.contains(feature.description));
            assert!(grid.contains(&format!("data-icon=\"{}\"", feature.icon.name())));
        }
        assert_eq!(grid.matches("<article class=\"feature-card").count(), 6);
    }

    #[test]
    fn renders_stats_value_then_label() {
        let html = render_landing();
        let stats_html = &html[position(&html, "id=\"stats\"")..];

        let mut cursor = 0;
        for stat in &STATS {
            let value_at = position(&stats_html[cursor..], stat.value) + cursor;
            let label_at = position(&stats_html[value_at..], stat.label) + value_at;
            assert!(value_at < label_at);
            cursor = label_at;
        }
    }

    #[test]
    fn renders_inert_buttons() {
        let html = render_landing();

        for cta in &CALLS_TO_ACTION {
            assert!(html.contains(&format!("data-action=\"{}\"", cta.action)));
            assert!(html.contains(cta.label));
        }
        assert_eq!(html.matches("type=\"button\"").count(), CALLS_TO_ACTION.len());
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn renders_footer() {
        let html = render_landing();
        let footer = &html[position(&html, "<footer")..];

        for group in &FOOTER_GROUPS {
            let heading_at = position(footer, group.heading);
            let mut last = heading_at;
            for item in group.items {
                let at = position(&footer[last..], item) + last;
                assert!(at > last);
                last = at;
            }
        }
        assert!(footer.contains("智能编程导师，让编程学习更简单、更高效。"));
        assert!(footer.contains("2024 CodeMentor AI"));
    }

    #[test]
    fn feature_cards_stagger() {
        let html = render_landing();

        assert_eq!(card_delays(&html), vec![0, 100, 200, 300, 400, 500]);
        assert!(html.contains("class=\"hero-body enter\""));
        assert!(html.contains("animation-duration:800ms"));
    }

    #[test]
    fn renders_at_rest_without_animations() {
        let options = PageOptions {
            animations: false,
            ..Default::default()
        };
        let html = render_landing_page(&options);

        assert!(card_delays(&html).is_empty());
        assert!(!html.contains(" enter\""));
        assert!(!html.contains("animation-delay"));
        assert!(!html.contains("style=\";\""));
        assert!(html.contains("<article class=\"feature-card\">"));
        assert!(html.contains("智能代码分析"));
    }

    #[test]
    fn honors_document_options() {
        let options = PageOptions {
            lang: "zh-Hans".into(),
            favicon_href: "/static/icon.svg".into(),
            animations: true,
        };
        let html = render_landing_page(&options);

        assert!(html.contains("lang=\"zh-Hans\""));
        assert!(html.contains("href=\"/static/icon.svg\""));
        assert!(html.contains("<title>CodeMentor AI - 智能编程导师</title>"));
    }

    #[test]
    fn rerender_is_byte_identical() {
        assert_eq!(render_landing(), render_landing());
    }
}
