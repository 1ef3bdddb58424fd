//! Hero section

use leptos::prelude::*;

use super::{enter_class, enter_style, ActionButton};
use crate::content::{BRAND_NAME, HERO_HEADLINE, HERO_LEAD, HERO_LEARN_MORE, HERO_START};
use crate::motion::EntranceAnimation;

/// Headline, lead paragraph and the two primary buttons.
///
/// The whole block fades in once with [`EntranceAnimation::HERO`].
#[component]
pub fn Hero(
    /// Play the entrance animation
    #[prop(default = true)]
    animations: bool,
) -> impl IntoView {
    let motion = animations.then_some(EntranceAnimation::HERO);
    let highlight = format!(" {BRAND_NAME}");

    view! {
        <section id="hero" class="section hero">
            <div class="container">
                <div class=enter_class("hero-body", motion) style=enter_style(motion)>
                    <h1 class="hero-title">
                        {HERO_HEADLINE}
                        <span class="highlight">{highlight}</span>
                    </h1>
                    <p class="hero-lead">{HERO_LEAD}</p>
                    <div class="hero-actions">
                        <ActionButton cta=HERO_START large=true />
                        <ActionButton cta=HERO_LEARN_MORE large=true />
                    </div>
                </div>
            </div>
        </section>
    }
}
