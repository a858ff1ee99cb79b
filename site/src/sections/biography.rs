use leptos::prelude::*;

use crate::components::{GlyphIcon, SectionWrapper, stagger};
use crate::types::Practitioner;

/// Short introduction followed by the specialties, in declared order.
#[component]
pub fn Biography(
    /// Profile whose city and specialties are shown
    practitioner: Practitioner,
) -> impl IntoView {
    let intro = format!(
        "Sou apaixonada por transformar a ida ao dentista em uma experiência mágica e positiva. \
         Como Odontopediatra em {}, meu objetivo é garantir que seu filho cresça com um sorriso \
         saudável e feliz.",
        practitioner.city
    );

    view! {
        <SectionWrapper id="about">
            <div class="bio-card reveal">
                <h2 class="bio-title">"Muito prazer! 💜"</h2>
                <p class="bio-text">{intro}</p>
                <ul class="specialties">
                    {practitioner
                        .specialties
                        .into_iter()
                        .enumerate()
                        .map(|(idx, specialty)| {
                            view! {
                                <li class="specialty reveal" style=stagger(idx + 1)>
                                    <GlyphIcon glyph=specialty.icon size="20" />
                                    <span class="specialty-label">{specialty.label}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </SectionWrapper>
    }
}
