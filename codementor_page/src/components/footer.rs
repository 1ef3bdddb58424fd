//! Page footer

use leptos::prelude::*;

use crate::content::{LinkGroup, BRAND_NAME, COPYRIGHT, FOOTER_GROUPS, FOOTER_TAGLINE};

/// Brand block, the link groups and the copyright line.
///
/// Group items are plain text; nothing on this page links anywhere yet.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-heading">{BRAND_NAME}</h3>
                        <p class="footer-tagline">{FOOTER_TAGLINE}</p>
                    </div>
                    {FOOTER_GROUPS.iter().map(|group| view! { <FooterGroup group=*group /> }).collect::<Vec<_>>()}
                </div>
                <div class="footer-bottom">
                    <p class="copyright">{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterGroup(group: LinkGroup) -> impl IntoView {
    view! {
        <div class="footer-group">
            <h4 class="footer-heading">{group.heading}</h4>
            <ul class="footer-links">
                {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
