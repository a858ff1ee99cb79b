//! Top of the page: portrait, greeting and the main call-to-action.

use leptos::prelude::*;

use crate::components::{Cta, Icon, ICON_STAR, stagger};
use crate::types::{Destination, Practitioner};

/// Portrait, greeting and booking button.
#[component]
pub fn Hero(
    /// Profile shown in the greeting
    practitioner: Practitioner,
    /// Portrait URL
    hero_image: String,
) -> impl IntoView {
    let portrait_alt = practitioner.display_name.clone();

    view! {
        <header class="hero">
            <div class="container hero-inner">
                <div class="hero-portrait reveal">
                    <img src=hero_image alt=portrait_alt />
                    <span class="hero-portrait-badge">
                        <Icon path=ICON_STAR size="20" />
                    </span>
                </div>
                <h1 class="hero-title reveal" style=stagger(2)>
                    "Olá! Eu sou a "
                    <span class="hero-title-accent">{practitioner.display_name}</span>
                </h1>
                <p class="hero-description reveal" style=stagger(3)>
                    "Cuidando do sorriso do seu filho com carinho, diversão e sem traumas."
                </p>
                <div class="reveal" style=stagger(5)>
                    <Cta
                        links=practitioner.links
                        to=Destination::Messaging
                        label="Agendar consulta gratuita"
                        caption="Resposta rápida • Sem compromisso"
                    />
                </div>
            </div>
        </header>
    }
}
