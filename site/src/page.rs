//! Root view and the static document shell.

use chrono::Datelike;
use leptos::prelude::*;

use crate::components::{Lightbox, LightboxController};
use crate::sections::{
    Biography, FinalCall, Footer, HappyPatientsGallery, Hero, ProcessSteps, ResultsGallery,
    SecondaryCall, TrustReasons,
};
use crate::styles::SITE_CSS;
use crate::types::SiteContent;

/// The landing page.
///
/// Owns the lightbox state. Galleries get an open callback and the overlay
/// gets a close callback; nothing else can touch the state.
#[component]
pub fn LandingPage(
    /// Profile and image data
    content: SiteContent,
    /// Pre-built controller; a fresh closed one when omitted
    #[prop(optional)]
    lightbox: Option<LightboxController>,
) -> impl IntoView {
    let lightbox = lightbox.unwrap_or_default();
    let on_open = lightbox.open_callback();

    let SiteContent {
        practitioner,
        images,
    } = content;
    let links = practitioner.links.clone();
    let year = chrono::Utc::now().year();

    view! {
        <Hero practitioner=practitioner.clone() hero_image=images.hero_image />
        <main>
            <Biography practitioner=practitioner.clone() />
            <ResultsGallery images=images.result_images on_open=on_open />
            <TrustReasons />
            <HappyPatientsGallery images=images.happy_patient_images on_open=on_open />
            <ProcessSteps links=links.clone() />
            <SecondaryCall links=links.clone() />
            <FinalCall links=links />
        </main>
        <Footer practitioner=practitioner year=year />
        <Lightbox controller=lightbox />
    }
}

/// The complete HTML document for static rendering.
#[component]
pub fn SiteDocument(
    /// Profile and image data
    content: SiteContent,
    /// Lightbox state owner
    lightbox: LightboxController,
) -> impl IntoView {
    let p = &content.practitioner;
    let title = format!("{} - {} em {}", p.display_name, p.profession, p.city);
    let description = format!(
        "{}, {} em {}. Cuidando do sorriso do seu filho com carinho, diversão e sem traumas.",
        p.display_name, p.profession, p.city
    );

    view! {
        <html lang="pt-BR">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <LandingPage content=content lightbox=lightbox />
            </body>
        </html>
    }
}
