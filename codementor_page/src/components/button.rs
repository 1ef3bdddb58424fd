//! Inert call-to-action button

use leptos::prelude::*;

use crate::content::CallToAction;

/// A `type="button"` with no handler attached.
///
/// The `data-action` hook lets a host page bind routing or auth later.
#[component]
pub fn ActionButton(
    cta: CallToAction,
    /// Hero/CTA sizing
    #[prop(default = false)]
    large: bool,
) -> impl IntoView {
    let class = if large {
        format!("{} btn-lg", cta.emphasis.class())
    } else {
        cta.emphasis.class().to_string()
    };

    view! {
        <button type="button" class=class data-action=cta.action>
            {cta.label}
        </button>
    }
}
