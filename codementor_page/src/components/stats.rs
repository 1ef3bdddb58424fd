//! Stats banner

use leptos::prelude::*;

use crate::content::{Stat, STATS};

/// Indigo band with the four headline figures.
#[component]
pub fn StatsBanner() -> impl IntoView {
    view! {
        <section id="stats" class="section section-accent">
            <div class="container">
                <div class="stats-grid">
                    {STATS.iter().map(|stat| view! { <StatBlock stat=*stat /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatBlock(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
