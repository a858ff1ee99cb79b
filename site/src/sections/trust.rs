use leptos::prelude::*;

use crate::components::{GlyphIcon, SectionHeader, SectionWrapper, stagger};
use crate::types::Glyph;

/// Icon, title, description.
const REASONS: [(Glyph, &str, &str); 4] = [
    (
        Glyph::Check,
        "Avaliação Honesta",
        "Sem tratamentos desnecessários. Transparência total com você.",
    ),
    (
        Glyph::Baby,
        "Linguagem Lúdica",
        "Explico tudo de forma que a criança entenda e não tenha medo.",
    ),
    (
        Glyph::Heart,
        "Ambiente Acolhedor",
        "Seu filho vai se sentir em casa, não em uma clínica fria.",
    ),
    (
        Glyph::Star,
        "Foco no Resultado",
        "Técnicas modernas para o melhor desenvolvimento do sorriso.",
    ),
];

/// Four reasons parents trust the practice.
#[component]
pub fn TrustReasons() -> impl IntoView {
    view! {
        <SectionWrapper id="why-us">
            <SectionHeader title="Por que as mães confiam?" />
            <div class="reasons-grid">
                {REASONS
                    .iter()
                    .enumerate()
                    .map(|(idx, (icon, title, description))| {
                        view! { <ReasonCard idx=idx icon=*icon title=*title description=*description /> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </SectionWrapper>
    }
}

#[component]
fn ReasonCard(
    idx: usize,
    icon: Glyph,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="reason-card reveal" style=stagger(idx)>
            <div class="reason-icon">
                <GlyphIcon glyph=icon size="24" />
            </div>
            <div>
                <h3 class="reason-title">{title}</h3>
                <p class="reason-description">{description}</p>
            </div>
        </article>
    }
}
