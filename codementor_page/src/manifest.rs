//! JSON-exportable snapshot of the page content.
//!
//! The manifest carries the same tables the components render, so a host
//! application can index the page or wire its buttons without scraping HTML.

use serde::Serialize;

use crate::content::{
    CallToAction, FeatureDescriptor, LinkGroup, Stat, BRAND_NAME, CALLS_TO_ACTION, COPYRIGHT,
    FEATURES, FOOTER_GROUPS, FOOTER_TAGLINE, PAGE_DESCRIPTION, PAGE_TITLE, STATS,
};

/// Everything shown on the landing page, in display order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageManifest {
    /// `<title>` text
    pub title: &'static str,
    /// Description meta value
    pub description: &'static str,
    /// Product name
    pub brand: &'static str,
    /// Feature grid entries
    pub features: &'static [FeatureDescriptor],
    /// Stats banner entries
    pub stats: &'static [Stat],
    /// Every button, in document order
    pub calls_to_action: &'static [CallToAction],
    /// Footer content
    pub footer: FooterManifest,
}

/// Footer part of [`PageManifest`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FooterManifest {
    /// Brand block tagline
    pub tagline: &'static str,
    /// Link groups
    pub groups: &'static [LinkGroup],
    /// Copyright line
    pub copyright: &'static str,
}

/// Build the manifest for the landing page.
pub fn manifest() -> PageManifest {
    PageManifest {
        title: PAGE_TITLE,
        description: PAGE_DESCRIPTION,
        brand: BRAND_NAME,
        features: &FEATURES,
        stats: &STATS,
        calls_to_action: &CALLS_TO_ACTION,
        footer: FooterManifest {
            tagline: FOOTER_TAGLINE,
            groups: &FOOTER_GROUPS,
            copyright: COPYRIGHT,
        },
    }
}
