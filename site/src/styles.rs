//! CSS for the landing page.
//!
//! Injected inline: into `<head>` by the static renderer and at the top of
//! `<body>` by the browser app.
//!
//! # Features
//!
//! - Soft pastel palette, rounded cards
//! - Single-column mobile layout, grids from tablet width up
//! - `reveal` entrance animation, staggered via inline `animation-delay`
//! - Full-viewport lightbox with `object-fit: contain`

/// Complete stylesheet.
///
/// Kept free of `<`, `>` and `&` so it survives HTML text escaping intact.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #fffdf9;
    --bg-tint: #f5f0ff;
    --accent: #a855f7;
    --accent-dark: #7e22ce;
    --accent-warm: #22c55e;
    --accent-pink: #db2777;
    --text: #23313a;
    --text-dim: #5f7280;
    --radius: 20px;
    --shadow: 0 10px 30px rgba(35, 49, 58, 0.08);
    --font: 'Nunito', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1120px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    font-size: 17px;
    line-height: 1.6;
}

img {
    display: block;
    max-width: 100%;
}

.container {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Sections */

.section {
    padding: 88px 0;
}

.section-tinted {
    background: var(--bg-tint);
}

.section-accent {
    background: linear-gradient(135deg, var(--accent) 0%, var(--accent-pink) 100%);
    color: #ffffff;
}

.section-header {
    max-width: 680px;
    margin: 0 auto 48px;
    text-align: center;
}

.section-title {
    margin: 0;
    font-size: clamp(28px, 4vw, 40px);
    line-height: 1.2;
}

.section-lead {
    margin: 16px 0 0;
    color: var(--text-dim);
}

/* Hero */

.hero {
    padding: 48px 0 72px;
    border-radius: 0 0 48px 48px;
    background: linear-gradient(180deg, var(--bg-tint) 0%, var(--bg) 100%);
}

.hero-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    max-width: 480px;
    text-align: center;
}

.hero-portrait {
    position: relative;
    margin-bottom: 24px;
}

.hero-portrait img {
    width: 208px;
    height: 208px;
    object-fit: cover;
    border: 4px solid #ffffff;
    border-radius: 50%;
    box-shadow: var(--shadow);
}

.hero-portrait-badge {
    position: absolute;
    right: 8px;
    bottom: 8px;
    display: inline-flex;
    padding: 8px;
    border-radius: 50%;
    background: #ffffff;
    color: #facc15;
    box-shadow: var(--shadow);
}

.hero-title {
    margin: 0 0 12px;
    font-size: clamp(30px, 5vw, 40px);
    line-height: 1.15;
}

.hero-title-accent {
    color: var(--accent);
}

.hero-description {
    margin: 0 0 32px;
    color: var(--text-dim);
    font-size: 19px;
    font-weight: 600;
}

.specialties {
    display: grid;
    gap: 12px;
    margin: 0;
    padding: 0;
    list-style: none;
}

.specialty {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px;
    border-radius: 12px;
    background: #ffffff;
    box-shadow: var(--shadow);
    font-weight: 600;
}

.glyph {
    flex: none;
    color: var(--accent);
}

/* Calls to action */

.cta {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
    width: 100%;
}

.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    justify-content: center;
    width: 100%;
    max-width: 420px;
    padding: 16px 32px;
    border-radius: 999px;
    font-weight: 700;
    text-decoration: none;
    transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.cta-button:hover {
    transform: translateY(-2px);
}

.cta-primary {
    background: var(--accent-warm);
    color: #ffffff;
    box-shadow: 0 8px 20px rgba(34, 197, 94, 0.35);
}

.cta-outline {
    background: #14b8a6;
    color: #ffffff;
}

.section-accent .cta-primary {
    background: #ffffff;
    color: var(--accent);
}

.cta-caption {
    margin: 0;
    color: var(--text-dim);
    font-size: 13px;
    font-weight: 600;
}

.section-accent .cta-caption {
    color: rgba(255, 255, 255, 0.85);
}

.call-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
    max-width: 480px;
    margin: 0 auto;
    text-align: center;
}

.call-title {
    margin: 0;
    font-size: clamp(22px, 3vw, 32px);
}

.call-lead {
    margin: 0;
}

.final-call {
    border-radius: 48px 48px 0 0;
}

/* Biography */

.bio-card {
    max-width: 560px;
    padding: 24px;
    border-radius: var(--radius);
    background: var(--bg-tint);
}

.bio-title {
    margin: 0 0 16px;
    color: var(--accent-dark);
    font-size: 26px;
}

.bio-text {
    margin: 0 0 16px;
}

/* Trust reasons */

.reasons-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
    gap: 24px;
}

.reason-card {
    display: flex;
    align-items: flex-start;
    gap: 16px;
    padding: 20px;
    border-radius: var(--radius);
    background: #ffffff;
    box-shadow: var(--shadow);
}

.reason-icon {
    display: inline-flex;
    flex: none;
    padding: 12px;
    border-radius: 50%;
    background: var(--bg-tint);
}

.reason-title {
    margin: 0 0 4px;
    font-size: 18px;
}

.reason-description {
    margin: 0;
    color: var(--text-dim);
    font-size: 15px;
}

/* Process steps */

.steps {
    display: grid;
    gap: 32px;
    max-width: 560px;
    margin: 0;
    padding: 0;
    list-style: none;
}

.step {
    display: flex;
    gap: 16px;
}

.step-number {
    display: inline-flex;
    flex: none;
    align-items: center;
    justify-content: center;
    width: 36px;
    height: 36px;
    border-radius: 50%;
    background: var(--accent);
    color: #ffffff;
    font-weight: 800;
}

.step-title {
    margin: 4px 0 4px;
    font-size: 19px;
}

.step-description {
    margin: 0 0 12px;
    color: var(--text-dim);
}

.step-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    border-radius: 10px;
    background: #dbeafe;
    color: #1d4ed8;
    font-size: 15px;
    font-weight: 600;
    text-decoration: none;
}

/* Galleries */

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
    gap: 12px;
}

.gallery-thumb {
    position: relative;
    padding: 0;
    border: none;
    border-radius: var(--radius);
    overflow: hidden;
    background: none;
    cursor: zoom-in;
    box-shadow: var(--shadow);
}

.gallery-thumb img {
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
    transition: transform 0.3s ease;
}

.gallery-thumb:hover img {
    transform: scale(1.04);
}

.gallery-hint {
    position: absolute;
    right: 0;
    bottom: 0;
    left: 0;
    padding: 4px 0;
    background: rgba(0, 0, 0, 0.5);
    color: #ffffff;
    font-size: 12px;
    text-align: center;
}

.results-disclaimer {
    margin: 16px 0 0;
    color: #9ca3af;
    font-size: 12px;
    font-style: italic;
    text-align: center;
}

.happy-patients {
    background: #fefce8;
}

/* Lightbox */

.lightbox {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 24px;
    background: rgba(10, 18, 24, 0.88);
    cursor: zoom-out;
    animation: fade-in 0.2s ease;
}

.lightbox-image {
    max-width: 100%;
    max-height: 100%;
    object-fit: contain;
    border-radius: 12px;
}

.lightbox-close {
    position: absolute;
    top: 16px;
    right: 16px;
    padding: 8px;
    border: none;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.15);
    color: #ffffff;
    cursor: pointer;
}

/* Footer */

.footer {
    padding: 48px 0;
    background: var(--text);
    color: #d7e1e7;
    text-align: center;
}

.footer-title {
    margin: 0 0 4px;
    color: #ffffff;
    font-size: 20px;
    font-weight: 800;
}

.footer-subtitle {
    margin: 0 0 4px;
}

.footer-city {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 4px;
    margin: 0 0 16px;
}

.footer-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 24px;
    margin: 24px 0;
}

.footer-link {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    color: #ffffff;
    text-decoration: none;
}

.footer-copyright {
    margin: 0;
    padding-top: 16px;
    border-top: 1px solid rgba(255, 255, 255, 0.15);
    font-size: 12px;
    opacity: 0.6;
}

/* Entrance animations */

.reveal {
    animation: rise-in 0.6s ease both;
}

@keyframes rise-in {
    from {
        opacity: 0;
        transform: translateY(24px);
    }
    to {
        opacity: 1;
        transform: none;
    }
}

@keyframes fade-in {
    from {
        opacity: 0;
    }
    to {
        opacity: 1;
    }
}

@media (prefers-reduced-motion: reduce) {
    .reveal,
    .lightbox {
        animation: none;
    }
}

@media (max-width: 860px) {
    .section {
        padding: 64px 0;
    }
}
"#;
