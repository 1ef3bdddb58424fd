//! Top navigation bar

use leptos::prelude::*;

use super::{ActionButton, HeroIcon, IconGlyph};
use crate::content::{BRAND_NAME, NAV_LOGIN, NAV_START};

/// Brand mark on the left, login and start buttons on the right.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container">
                <div class="nav-inner">
                    <div class="nav-brand">
                        <HeroIcon glyph=IconGlyph::CodeBracket class="icon-brand" />
                        <span class="brand-name">{BRAND_NAME}</span>
                    </div>
                    <div class="nav-actions">
                        <ActionButton cta=NAV_LOGIN />
                        <ActionButton cta=NAV_START />
                    </div>
                </div>
            </div>
        </nav>
    }
}
