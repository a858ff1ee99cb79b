use leptos::prelude::*;

use crate::components::{Cta, CtaVariant, SectionTone, SectionWrapper};
use crate::types::{Destination, OutboundLinks};

/// Mid-page nudge for parents who still have questions.
#[component]
pub fn SecondaryCall(
    /// Outbound links; only messaging is used
    links: OutboundLinks,
) -> impl IntoView {
    view! {
        <SectionWrapper tone=SectionTone::Tinted class="secondary-call">
            <div class="call-inner reveal">
                <h3 class="call-title">"Ainda com dúvidas sobre o tratamento?"</h3>
                <p class="call-lead">
                    "Converse diretamente comigo no WhatsApp. É gratuito e sem compromisso."
                </p>
                <Cta
                    links=links
                    to=Destination::Messaging
                    label="Tirar dúvidas no WhatsApp"
                    variant=CtaVariant::Outline
                />
            </div>
        </SectionWrapper>
    }
}

/// Closing booking appeal.
#[component]
pub fn FinalCall(
    /// Outbound links; only messaging is used
    links: OutboundLinks,
) -> impl IntoView {
    view! {
        <SectionWrapper id="book" tone=SectionTone::Accent class="final-call">
            <div class="call-inner reveal">
                <h2 class="call-title">"Vamos cuidar desse sorriso?"</h2>
                <p class="call-lead">"Garanta o futuro saudável do seu filho hoje mesmo."</p>
                <Cta
                    links=links
                    to=Destination::Messaging
                    label="Agendar Consulta Gratuita"
                    caption="Vagas limitadas para este mês."
                />
            </div>
        </SectionWrapper>
    }
}
