//! Closing call-to-action block

use leptos::prelude::*;

use super::ActionButton;
use crate::content::{CTA_HEADING, CTA_REGISTER, CTA_TEXT};

/// Closing pitch with the register button.
#[component]
pub fn CallToActionBlock() -> impl IntoView {
    view! {
        <section id="cta" class="section section-muted">
            <div class="container-narrow">
                <h2 class="section-title">{CTA_HEADING}</h2>
                <p class="cta-text">{CTA_TEXT}</p>
                <ActionButton cta=CTA_REGISTER large=true />
            </div>
        </section>
    }
}
