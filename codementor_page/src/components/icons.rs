//! Inline SVG glyphs.
//!
//! Outline icons on a 24×24 grid, drawn with `stroke="currentColor"` so they
//! pick up the surrounding text color. Paths follow the Heroicons outline set.

use leptos::prelude::*;
use serde::Serialize;

/// The glyphs used on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconGlyph {
    /// `</>` brackets; also the brand mark
    CodeBracket,
    /// Mortarboard
    AcademicCap,
    /// Three ascending bars
    ChartBar,
    /// Rocket
    RocketLaunch,
    /// Three people
    UserGroup,
    /// Gear
    Cog,
}

impl IconGlyph {
    /// SVG path data (`d` attribute).
    pub fn path(self) -> &'static str {
        match self {
            IconGlyph::CodeBracket => ICON_CODE_BRACKET,
            IconGlyph::AcademicCap => ICON_ACADEMIC_CAP,
            IconGlyph::ChartBar => ICON_CHART_BAR,
            IconGlyph::RocketLaunch => ICON_ROCKET_LAUNCH,
            IconGlyph::UserGroup => ICON_USER_GROUP,
            IconGlyph::Cog => ICON_COG,
        }
    }

    /// Kebab-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            IconGlyph::CodeBracket => "code-bracket",
            IconGlyph::AcademicCap => "academic-cap",
            IconGlyph::ChartBar => "chart-bar",
            IconGlyph::RocketLaunch => "rocket-launch",
            IconGlyph::UserGroup => "user-group",
            IconGlyph::Cog => "cog",
        }
    }
}

/// Renders an outline glyph as inline SVG.
///
/// # Props
///
/// * `glyph` - which icon to draw
/// * `class` - CSS classes controlling size and color (default: "icon")
///
/// # Example
///
/// ```rust,ignore
/// view! { <HeroIcon glyph=IconGlyph::Cog class="icon-lg" /> }
/// ```
#[component]
pub fn HeroIcon(
    /// Icon to render
    glyph: IconGlyph,
    /// CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            aria-hidden="true"
            data-icon=glyph.name()
            class=class
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=glyph.path()></path>
        </svg>
    }
}

const ICON_CODE_BRACKET: &str = "M17.25 6.75 22.5 12l-5.25 5.25m-10.5 0L1.5 12l5.25-5.25m7.5-3-4.5 16.5";

const ICON_ACADEMIC_CAP: &str = "M4.26 10.147a60.438 60.438 0 0 0-.491 6.347A48.62 48.62 0 0 1 12 20.904a48.62 48.62 0 0 1 8.232-4.41 60.46 60.46 0 0 0-.491-6.347m-15.482 0a50.636 50.636 0 0 0-2.658-.813A59.906 59.906 0 0 1 12 3.493a59.903 59.903 0 0 1 10.399 5.84c-.896.248-1.783.52-2.658.814m-15.482 0A50.717 50.717 0 0 1 12 13.489a50.702 50.702 0 0 1 7.74-3.342M6.75 15a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm0 0v-3.675A55.378 55.378 0 0 1 12 8.443m-7.007 11.55A5.981 5.981 0 0 0 6.75 15.75v-1.5";

const ICON_CHART_BAR: &str = "M3 13.125C3 12.504 3.504 12 4.125 12h2.25c.621 0 1.125.504 1.125 1.125v6.75C7.5 20.496 6.996 21 6.375 21h-2.25A1.125 1.125 0 0 1 3 19.875v-6.75ZM9.75 8.625c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125v11.25c0 .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 0 1-1.125-1.125V8.625ZM16.5 4.125c0-.621.504-1.125 1.125-1.125h2.25C20.496 3 21 3.504 21 4.125v15.75c0 .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 0 1-1.125-1.125V4.125Z";

const ICON_ROCKET_LAUNCH: &str = "M15.59 14.37a6 6 0 0 1-5.84 7.38v-4.8m5.84-2.58a14.98 14.98 0 0 0 6.16-12.12A14.98 14.98 0 0 0 9.631 8.41m5.96 5.96a14.926 14.926 0 0 1-5.841 2.58m-.119-8.54a6 6 0 0 0-7.381 5.84h4.8m2.581-5.84a14.927 14.927 0 0 0-2.58 5.84m2.699 2.7c-.103.021-.207.041-.311.06a15.09 15.09 0 0 1-2.448-2.448 14.9 14.9 0 0 1 .06-.312m-2.24 2.39a4.493 4.493 0 0 0-1.757 4.306 4.493 4.493 0 0 0 4.306-1.758M16.5 9a1.5 1.5 0 1 1-3 0 1.5 1.5 0 0 1 3 0Z";

const ICON_USER_GROUP: &str = "M18 18.72a9.094 9.094 0 0 0 3.741-.479 3 3 0 0 0-4.682-2.72m.94 3.198.001.031c0 .225-.012.447-.037.666A11.944 11.944 0 0 1 12 21c-2.17 0-4.207-.576-5.963-1.584A6.062 6.062 0 0 1 6 18.719m12 0a5.971 5.971 0 0 0-.941-3.197m0 0A5.995 5.995 0 0 0 12 12.75a5.995 5.995 0 0 0-5.058 2.772m0 0a3 3 0 0 0-4.681 2.72 8.986 8.986 0 0 0 3.74.477m.94-3.197a5.971 5.971 0 0 0-.94 3.197M15 6.75a3 3 0 1 1-6 0 3 3 0 0 1 6 0Zm6 3a2.25 2.25 0 1 1-4.5 0 2.25 2.25 0 0 1 4.5 0Zm-13.5 0a2.25 2.25 0 1 1-4.5 0 2.25 2.25 0 0 1 4.5 0Z";

const ICON_COG: &str = "M4.5 12a7.5 7.5 0 0 0 15 0m-15 0a7.5 7.5 0 1 1 15 0m-15 0H3m16.5 0H21m-1.5 0H12m-8.457 3.077 1.41-.513m14.095-5.13 1.41-.513M5.106 17.785l1.15-.964m11.49-9.642 1.149-.964M7.501 19.795l.75-1.3m7.5-12.99.75-1.3m-6.063 16.658.26-1.477m2.605-14.772.26-1.477m0 17.726-.26-1.477M10.698 4.614l-.26-1.477M16.5 19.794l-.75-1.299M7.5 4.205 12 12m6.894 5.785-1.149-.964M6.256 7.178l-1.15-.964m15.352 8.864-1.41-.513M4.954 9.435l-1.41-.514M12.002 12l-3.75 6.495";
