use leptos::prelude::*;

use crate::components::{Icon, ICON_INSTAGRAM, ICON_MAP_PIN};
use crate::types::{Destination, Practitioner};

/// Social link, practitioner identity and copyright line.
#[component]
pub fn Footer(
    /// Profile shown in the footer
    practitioner: Practitioner,
    /// Year printed in the copyright line
    year: i32,
) -> impl IntoView {
    let social = practitioner.links.resolve(Destination::Social).to_string();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-links">
                    <a
                        href=social
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer-link"
                        aria-label="Instagram"
                    >
                        <Icon path=ICON_INSTAGRAM size="24" />
                    </a>
                </div>
                <p class="footer-title">{practitioner.display_name}</p>
                <p class="footer-subtitle">{practitioner.profession}</p>
                <p class="footer-city">
                    <Icon path=ICON_MAP_PIN size="12" />
                    {practitioner.city}
                </p>
                <p class="footer-copyright">{format!("© {year} Todos os direitos reservados.")}</p>
            </div>
        </footer>
    }
}
