//! Root document component - the complete HTML page

use super::{CallToActionBlock, FeatureGrid, Footer, Hero, Nav, StatsBanner};
use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use crate::styles::{CSP, LANDING_CSS};
use crate::PageOptions;
use leptos::prelude::*;

/// The complete landing page document.
///
/// Takes no required props: `<LandingPage />` renders the default page.
#[component]
pub fn LandingPage(
    /// Document-level settings (language, favicon, animations)
    #[prop(optional)]
    options: PageOptions,
) -> impl IntoView {
    let animations = options.animations;

    view! {
        <html lang=options.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{PAGE_TITLE}</title>
                <meta name="description" content=PAGE_DESCRIPTION />
                <link rel="icon" href=options.favicon_href />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <Nav />
                    <main>
                        <Hero animations=animations />
                        <FeatureGrid animations=animations />
                        <StatsBanner />
                        <CallToActionBlock />
                    </main>
                    <Footer />
                </div>
            </body>
        </html>
    }
}
