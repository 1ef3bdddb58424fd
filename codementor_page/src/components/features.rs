//! Feature grid section

use leptos::prelude::*;

use super::{enter_class, enter_style, HeroIcon};
use crate::content::{FeatureDescriptor, FEATURES, FEATURES_HEADING, FEATURES_SUBHEADING};
use crate::motion::EntranceAnimation;

/// Section heading plus one card per entry of [`FEATURES`], in order.
#[component]
pub fn FeatureGrid(
    /// Play the staggered entrance animation
    #[prop(default = true)]
    animations: bool,
) -> impl IntoView {
    view! {
        <section id="features" class="section section-white">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{FEATURES_HEADING}</h2>
                    <p class="section-subtitle">{FEATURES_SUBHEADING}</p>
                </div>
                <div class="feature-grid">
                    {FEATURES.iter().enumerate().map(|(idx, feature)| {
                        let motion = animations.then(|| EntranceAnimation::feature_card(idx));
                        view! { <FeatureCard feature=*feature motion=motion /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A single feature: glyph, title, description.
#[component]
pub fn FeatureCard(
    feature: FeatureDescriptor,
    /// Entrance timing; `None` renders the card at rest
    #[prop(default = None)]
    motion: Option<EntranceAnimation>,
) -> impl IntoView {
    view! {
        <article class=enter_class("feature-card", motion) style=enter_style(motion)>
            <HeroIcon glyph=feature.icon class="icon-feature" />
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
