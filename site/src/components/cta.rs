//! Call-to-action control.

use leptos::prelude::*;

use super::{Icon, ICON_CHAT, ICON_INSTAGRAM, ICON_MAP_PIN};
use crate::types::{Destination, OutboundLinks};

/// Visual weight of a call-to-action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaVariant {
    /// Filled button
    #[default]
    Primary,
    /// Bordered button on tinted backgrounds
    Outline,
}

impl CtaVariant {
    fn class(self) -> &'static str {
        match self {
            CtaVariant::Primary => "cta-button cta-primary",
            CtaVariant::Outline => "cta-button cta-outline",
        }
    }
}

fn destination_icon(destination: Destination) -> &'static str {
    match destination {
        Destination::Messaging => ICON_CHAT,
        Destination::Social => ICON_INSTAGRAM,
        Destination::Map => ICON_MAP_PIN,
    }
}

/// Outbound link styled as a button, with an optional caption under it.
///
/// Opens in a new browsing context so the landing page stays open.
#[component]
pub fn Cta(
    /// Where each destination points
    links: OutboundLinks,
    /// Which of the three destinations this control opens
    to: Destination,
    /// Button text
    #[prop(into)]
    label: String,
    /// Small reassurance line under the button
    #[prop(optional, into)]
    caption: Option<String>,
    /// Visual weight
    #[prop(optional)]
    variant: CtaVariant,
) -> impl IntoView {
    let href = links.resolve(to).to_string();

    view! {
        <div class="cta">
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=variant.class()
            >
                <Icon path=destination_icon(to) size="20" class="cta-icon" />
                <span>{label}</span>
            </a>
            {caption.map(|text| view! { <p class="cta-caption">{text}</p> })}
        </div>
    }
}
