use leptos::prelude::*;

use crate::components::{Icon, ICON_MAP_PIN, SectionHeader, SectionWrapper, stagger};
use crate::types::{Destination, OutboundLinks};

/// Three numbered steps to the first visit. The first one links to the map.
#[component]
pub fn ProcessSteps(
    /// Source of the map link in step one
    links: OutboundLinks,
) -> impl IntoView {
    let map = links.resolve(Destination::Map).to_string();

    view! {
        <SectionWrapper id="how-it-works">
            <SectionHeader title="Primeira consulta simples" />
            <ol class="steps">
                <Step idx=0 title="Endereço">
                    <p class="step-description">"Veja como é fácil chegar ao consultório."</p>
                    <a href=map target="_blank" rel="noopener noreferrer" class="step-link">
                        <Icon path=ICON_MAP_PIN size="16" />
                        "Ver no Google Maps"
                    </a>
                </Step>
                <Step idx=1 title="Agendamento">
                    <p class="step-description">"Vamos encontrar o melhor horário para vocês."</p>
                </Step>
                <Step idx=2 title="Avaliação Gratuita">
                    <p class="step-description">
                        "Conheço seu filho e avalio o sorriso com carinho."
                    </p>
                </Step>
            </ol>
        </SectionWrapper>
    }
}

#[component]
fn Step(idx: usize, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <li class="step reveal" style=stagger(idx)>
            <span class="step-number">{idx + 1}</span>
            <div class="step-body">
                <h3 class="step-title">{title}</h3>
                {children()}
            </div>
        </li>
    }
}
