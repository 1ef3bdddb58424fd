//! CSS for the landing page.
//!
//! The stylesheet is inlined into the document head so the page is a single
//! self-contained file. Layout is mobile-first with `md` (768px) and `lg`
//! (1024px) breakpoints.
//!
//! # Customization
//!
//! ```rust
//! use codementor_page::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains("@keyframes enter"));
//! ```

/// Content-Security-Policy for the rendered page.
///
/// The page ships no script: animations are pure CSS.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:; base-uri 'none'; form-action 'none'";

/// Complete CSS for the landing page.
pub const LANDING_CSS: &str = r#"
:root {
    --indigo-50: #eef2ff;
    --indigo-100: #e0e7ff;
    --indigo-200: #c7d2fe;
    --indigo-600: #4f46e5;
    --indigo-700: #4338ca;
    --blue-50: #eff6ff;
    --gray-50: #f9fafb;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --white: #ffffff;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'PingFang SC', 'Microsoft YaHei', 'Noto Sans CJK SC', sans-serif;
    --container-max: 80rem;
    --container-narrow: 56rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    line-height: 1.5;
}

h1, h2, h3, h4, p, ul {
    margin: 0;
}

.page {
    min-height: 100vh;
    background: linear-gradient(to bottom right, var(--blue-50), var(--indigo-100));
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

.container-narrow {
    max-width: var(--container-narrow);
    margin: 0 auto;
    padding: 0 1rem;
    text-align: center;
}

@media (min-width: 640px) {
    .container, .container-narrow { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
    .container, .container-narrow { padding: 0 2rem; }
}

/* Icons */
.icon { width: 1.5rem; height: 1.5rem; }
.icon-brand { width: 2rem; height: 2rem; color: var(--indigo-600); }
.icon-feature { width: 3rem; height: 3rem; color: var(--indigo-600); margin-bottom: 1rem; }

/* Buttons */
.btn {
    font: inherit;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 0.15s ease, color 0.15s ease;
}

.btn-ghost {
    background: none;
    color: var(--gray-600);
    padding: 0.5rem 0;
}

.btn-ghost:hover { color: var(--gray-900); }

.btn-primary {
    background: var(--indigo-600);
    color: var(--white);
    border-radius: 0.375rem;
    padding: 0.5rem 1rem;
}

.btn-primary:hover { background: var(--indigo-700); }

.btn-secondary {
    background: transparent;
    color: var(--indigo-600);
    border-color: var(--indigo-600);
    border-radius: 0.5rem;
}

.btn-secondary:hover { background: var(--indigo-50); }

.btn-lg {
    padding: 0.75rem 2rem;
    border-radius: 0.5rem;
    font-size: 1.125rem;
    font-weight: 600;
}

/* Nav */
.nav {
    background: var(--white);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    height: 4rem;
}

.nav-brand, .nav-actions {
    display: flex;
    align-items: center;
}

.nav-actions { gap: 1rem; }

.brand-name {
    margin-left: 0.5rem;
    font-size: 1.25rem;
    font-weight: 700;
}

/* Sections */
.section { padding: 5rem 0; }
.section-white { background: var(--white); }
.section-muted { background: var(--gray-50); }
.section-accent { background: var(--indigo-600); }

.section-header {
    text-align: center;
    margin-bottom: 4rem;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.section-subtitle {
    font-size: 1.25rem;
    color: var(--gray-600);
}

/* Hero */
.hero { text-align: center; }

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    line-height: 1.1;
    margin-bottom: 1.5rem;
}

.hero-title .highlight { color: var(--indigo-600); }

.hero-lead {
    font-size: 1.25rem;
    color: var(--gray-600);
    max-width: 48rem;
    margin: 0 auto 2rem;
}

.hero-actions {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    justify-content: center;
}

@media (min-width: 640px) {
    .hero-title { font-size: 3.75rem; }
    .hero-actions { flex-direction: row; }
}

/* Feature grid */
.feature-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

@media (min-width: 768px) {
    .feature-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .feature-grid { grid-template-columns: repeat(3, 1fr); }
}

.feature-card {
    background: var(--gray-50);
    padding: 1.5rem;
    border-radius: 0.5rem;
    transition: box-shadow 0.15s ease;
}

.feature-card:hover {
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

.feature-title {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 0.5rem;
}

.feature-description { color: var(--gray-600); }

/* Stats */
.stats-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    text-align: center;
}

@media (min-width: 768px) {
    .stats-grid { grid-template-columns: repeat(4, 1fr); }
}

.stat-value {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--white);
    margin-bottom: 0.5rem;
}

.stat-label { color: var(--indigo-200); }

/* Call to action */
.cta-text {
    font-size: 1.25rem;
    color: var(--gray-600);
    margin-bottom: 2rem;
}

/* Footer */
.footer {
    background: var(--gray-900);
    color: var(--white);
    padding: 3rem 0;
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

@media (min-width: 768px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
}

.footer-heading {
    font-size: 1.125rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.footer-tagline { color: var(--gray-400); }

.footer-links {
    list-style: none;
    padding: 0;
    color: var(--gray-400);
}

.footer-links li + li { margin-top: 0.5rem; }

.footer-bottom {
    border-top: 1px solid var(--gray-800);
    margin-top: 2rem;
    padding-top: 2rem;
    text-align: center;
    color: var(--gray-400);
}

/* Entrance animation: runs once, holds the initial frame during the delay */
@keyframes enter {
    from {
        opacity: 0;
        transform: translateY(var(--enter-offset, 20px));
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.enter {
    animation-name: enter;
    animation-timing-function: cubic-bezier(0.33, 1, 0.68, 1);
    animation-iteration-count: 1;
    animation-fill-mode: both;
}

@media (prefers-reduced-motion: reduce) {
    .enter {
        animation: none;
        opacity: 1;
        transform: none;
    }
}
"#;
