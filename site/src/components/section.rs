//! Section wrapper - consistent width and spacing for every content block.

use leptos::prelude::*;

/// Background treatment of a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionTone {
    /// Page background
    #[default]
    Plain,
    /// Soft tinted band, used to alternate sections
    Tinted,
    /// Strong accent band for calls-to-action
    Accent,
}

/// Lays out children inside a centered, padded container.
#[component]
pub fn SectionWrapper(
    /// Anchor id
    #[prop(optional)]
    id: &'static str,
    /// Background treatment
    #[prop(optional)]
    tone: SectionTone,
    /// Extra CSS class for the outer `<section>`
    #[prop(optional)]
    class: &'static str,
    /// Section body
    children: Children,
) -> impl IntoView {
    let tone_class = match tone {
        SectionTone::Plain => "section",
        SectionTone::Tinted => "section section-tinted",
        SectionTone::Accent => "section section-accent",
    };
    let class = if class.is_empty() {
        tone_class.to_string()
    } else {
        format!("{tone_class} {class}")
    };

    view! {
        <section id=(!id.is_empty()).then_some(id) class=class>
            <div class="container">{children()}</div>
        </section>
    }
}

/// Title + optional lead paragraph shared by most sections.
#[component]
pub fn SectionHeader(
    /// Heading text
    #[prop(into)]
    title: String,
    /// Short line under the heading
    #[prop(optional)]
    lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header reveal">
            <h2 class="section-title">{title}</h2>
            {lead.map(|text| view! { <p class="section-lead">{text}</p> })}
        </div>
    }
}

/// `animation-delay` for the n-th item of a staggered entrance.
pub fn stagger(idx: usize) -> String {
    format!("animation-delay: {}ms", idx * 80)
}
