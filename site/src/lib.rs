//! # smile-site
//!
//! Leptos components for a pediatric dentist's landing page.
//!
//! The page is one scrolling view built from two constant data sources,
//! the practitioner profile and the image catalog, plus a single piece of
//! UI state: which photo, if any, is enlarged in the lightbox.
//!
//! The same components serve two hosts:
//!
//! - the browser app (`smile-landing`), which mounts [`page::LandingPage`]
//!   and makes the lightbox interactive
//! - [`render_site`], which renders a complete static HTML document
//!
//! ## Quick Start
//!
//! ```rust
//! use smile_site::{render_site, types::SiteContent};
//!
//! let content = SiteContent::builtin().expect("embedded content is valid");
//! let html = render_site(&content);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - profile and image data
//! - [`content`] - loading and validating `content.toml`
//! - [`lightbox`] - lightbox state machine
//! - [`components`] - leaf components (call-to-action, section wrapper, gallery, overlay)
//! - [`sections`] - the nine page sections
//! - [`page`] - root view and document shell
//! - [`styles`] - CSS constants

#![warn(missing_docs)]

pub mod components;
pub mod content;
pub mod lightbox;
pub mod page;
pub mod sections;
pub mod styles;
pub mod types;

use components::LightboxController;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use lightbox::LightboxState;
use page::SiteDocument;
use types::SiteContent;

pub use content::ContentError;

/// Render the landing page as a complete HTML document, lightbox closed.
///
/// # Example
///
/// ```rust
/// use smile_site::{render_site, types::SiteContent};
///
/// let content = SiteContent::builtin().unwrap();
/// let html = render_site(&content);
/// assert!(html.contains(&content.practitioner.display_name));
/// ```
pub fn render_site(content: &SiteContent) -> String {
    render_site_with(content, LightboxState::Closed)
}

/// Render the landing page with the lightbox in a given state.
pub fn render_site_with(content: &SiteContent, lightbox: LightboxState) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let controller = LightboxController::with_state(lightbox);
        let doc = view! { <SiteDocument content=content.clone() lightbox=controller /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
