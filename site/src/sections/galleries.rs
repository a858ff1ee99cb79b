//! The two photo sections.

use leptos::prelude::*;

use crate::components::{Gallery, SectionHeader, SectionTone, SectionWrapper};

/// Before/after treatment results.
#[component]
pub fn ResultsGallery(
    /// Result photo URLs in display order
    images: Vec<String>,
    /// Lightbox open callback
    on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <SectionWrapper id="results" tone=SectionTone::Tinted>
            <SectionHeader
                title="Resultados Reais ✨"
                lead="Transformações que devolvem a confiança"
            />
            <Gallery images=images alt="Resultado" hint="Toque para ampliar" on_open=on_open />
            <p class="results-disclaimer">
                "* Resultados podem variar de pessoa para pessoa. Imagens autorizadas."
            </p>
        </SectionWrapper>
    }
}

/// Photos of children after their visits.
#[component]
pub fn HappyPatientsGallery(
    /// Patient photo URLs in display order
    images: Vec<String>,
    /// Lightbox open callback
    on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <SectionWrapper id="happy-patients" tone=SectionTone::Tinted class="happy-patients">
            <SectionHeader title="Sorrisos Felizes 😄" lead="Aqui o medo passa longe!" />
            <Gallery images=images alt="Paciente feliz" on_open=on_open />
        </SectionWrapper>
    }
}
