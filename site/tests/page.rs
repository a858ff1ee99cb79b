//! Whole-page rendering tests.

use chrono::Datelike;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;
use smile_site::components::LightboxController;
use smile_site::lightbox::LightboxState;
use smile_site::page::LandingPage;
use smile_site::render_site;
use smile_site::types::{Destination, Glyph, SiteContent, Specialty};

fn content() -> SiteContent {
    SiteContent::builtin().expect("embedded content")
}

fn render_page(content: &SiteContent, controller: LightboxController) -> String {
    view! { <LandingPage content=content.clone() lightbox=controller /> }.to_html()
}

/// `href` of every `<a ...>` tag, in document order.
fn anchor_hrefs(html: &str) -> Vec<String> {
    html.match_indices("<a ")
        .filter_map(|(start, _)| {
            let tag = &html[start..start + html[start..].find('>')?];
            let href = tag.split("href=\"").nth(1)?;
            Some(href[..href.find('"')?].replace("&amp;", "&"))
        })
        .collect()
}

/// `src` of the `<img>` inside the dialog, if the overlay is present.
fn overlay_src(html: &str) -> Option<String> {
    let dialog = &html[html.find(r#"role="dialog""#)?..];
    let img = &dialog[dialog.find("<img")?..];
    let img = &img[..img.find('>')?];
    let src = &img[img.find(r#" src=""#)? + 6..];
    Some(src[..src.find('"')?].to_string())
}

/// Markup of the `<section>` carrying `marker`, up to its closing tag.
fn section_containing<'a>(html: &'a str, marker: &str) -> &'a str {
    let start = html.find(marker).unwrap_or_else(|| panic!("missing {marker}"));
    let rest = &html[start..];
    &rest[..rest.find("</section>").unwrap_or(rest.len())]
}

#[test]
fn lightbox_scenario() {
    let content = content();
    let results = &content.images.result_images;
    let happy = &content.images.happy_patient_images;

    Owner::new().with(|| {
        let controller = LightboxController::new();
        let html = render_page(&content, controller);
        assert!(!html.contains(r#"role="dialog""#));
        assert_eq!(overlay_src(&html), None);

        // Second result thumbnail.
        controller.open_callback().run(results[1].clone());
        let html = render_page(&content, controller);
        assert_eq!(overlay_src(&html), Some(results[1].clone()));

        // Background click.
        controller.close_callback().run(());
        assert_eq!(controller.state(), LightboxState::Closed);
        let html = render_page(&content, controller);
        assert!(!html.contains(r#"role="dialog""#));

        // First happy-patient thumbnail.
        controller.open_callback().run(happy[0].clone());
        let html = render_page(&content, controller);
        assert_eq!(overlay_src(&html), Some(happy[0].clone()));
    });
}

#[test]
fn opening_another_image_replaces_the_first() {
    let content = content();
    let results = &content.images.result_images;

    Owner::new().with(|| {
        let controller = LightboxController::new();
        controller.activate_thumbnail(results[0].clone());
        controller.activate_thumbnail(results[2].clone());

        let html = render_page(&content, controller);
        assert_eq!(html.matches(r#"role="dialog""#).count(), 1);
        assert_eq!(overlay_src(&html), Some(results[2].clone()));
    });
}

#[test]
fn every_outbound_link_is_one_of_three_destinations() {
    let content = content();
    let links = &content.practitioner.links;
    let allowed: Vec<&str> = Destination::ALL.iter().map(|d| links.resolve(*d)).collect();

    let hrefs = anchor_hrefs(&render_site(&content));
    assert!(hrefs.len() >= 3);
    for href in &hrefs {
        assert!(allowed.contains(&href.as_str()), "unexpected link target {href}");
    }
    for destination in allowed {
        assert!(hrefs.iter().any(|h| h == destination), "{destination} never linked");
    }
}

#[test]
fn sections_render_in_page_order() {
    let html = render_site(&content());
    let markers = [
        r#"class="hero""#,
        r#"id="about""#,
        r#"id="results""#,
        r#"id="why-us""#,
        r#"id="happy-patients""#,
        r#"id="how-it-works""#,
        "secondary-call",
        r#"id="book""#,
        r#"class="footer""#,
    ];

    let positions: Vec<usize> = markers
        .iter()
        .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn process_has_three_steps() {
    let html = render_site(&content());
    assert_eq!(html.matches(r#"class="step-number""#).count(), 3);
}

#[test]
fn galleries_render_every_image_in_order() {
    let content = content();
    let html = render_site(&content);

    let images = content
        .images
        .result_images
        .iter()
        .chain(&content.images.happy_patient_images);
    let mut last = 0;
    for src in images {
        let pos = html[last..]
            .find(&format!(r#"src="{src}""#))
            .unwrap_or_else(|| panic!("{src} missing or out of order"));
        last += pos + 1;
    }

    let thumbs = content.images.result_images.len() + content.images.happy_patient_images.len();
    assert_eq!(html.matches(r#"class="gallery-thumb reveal""#).count(), thumbs);
}

#[test]
fn specialties_keep_declared_order() {
    let mut content = content();
    content.practitioner.specialties = vec![
        Specialty {
            icon: Glyph::Star,
            label: "Zebra label".into(),
        },
        Specialty {
            icon: Glyph::Heart,
            label: "Alpha label".into(),
        },
        Specialty {
            icon: Glyph::Smile,
            label: "Middle label".into(),
        },
    ];

    let html = render_site(&content);
    let zebra = html.find("Zebra label").unwrap();
    let alpha = html.find("Alpha label").unwrap();
    let middle = html.find("Middle label").unwrap();
    assert!(zebra < alpha && alpha < middle);
}

#[test]
fn empty_lists_render_without_items() {
    let mut content = content();
    content.practitioner.specialties.clear();
    content.images.result_images.clear();
    content.images.happy_patient_images.clear();

    let html = render_site(&content);
    assert!(!html.contains(r#"class="specialty "#));
    assert!(!html.contains(r#"class="gallery-thumb"#));
    assert!(html.contains(r#"id="results""#));
    assert!(html.contains(r#"id="happy-patients""#));
}

#[test]
fn first_step_links_to_the_map() {
    let content = content();
    let html = render_site(&content);
    let steps = section_containing(&html, r#"id="how-it-works""#);

    assert!(steps.contains("Endereço"));
    assert!(steps.contains("Ver no Google Maps"));
    assert_eq!(anchor_hrefs(steps), vec![content.practitioner.links.map.clone()]);
}

#[test]
fn secondary_call_opens_messaging() {
    let content = content();
    let html = render_site(&content);
    let call = section_containing(&html, r#"secondary-call""#);

    assert!(call.contains("Tirar dúvidas no WhatsApp"));
    assert_eq!(anchor_hrefs(call), vec![content.practitioner.links.messaging.clone()]);
}

#[test]
fn specialties_belong_to_the_biography() {
    let content = content();
    let html = render_site(&content);
    let about = section_containing(&html, r#"id="about""#);

    for specialty in &content.practitioner.specialties {
        assert!(about.contains(&specialty.label), "{} not in biography", specialty.label);
    }
    let hero = &html[html.find(r#"class="hero""#).unwrap()..html.find(r#"id="about""#).unwrap()];
    assert!(!hero.contains("specialty"));
}

#[test]
fn results_thumbnails_carry_hint_and_disclaimer() {
    let content = content();
    let html = render_site(&content);
    let results = section_containing(&html, r#"id="results""#);

    assert_eq!(
        results.matches("Toque para ampliar").count(),
        content.images.result_images.len()
    );
    assert!(results.contains("Resultados podem variar de pessoa para pessoa."));

    let happy = section_containing(&html, r#"id="happy-patients""#);
    assert!(!happy.contains("Toque para ampliar"));
}

#[test]
fn footer_shows_social_link_and_current_year() {
    let content = content();
    let html = render_site(&content);
    let footer = &html[html.find(r#"class="footer""#).unwrap()..];

    assert_eq!(anchor_hrefs(footer), vec![content.practitioner.links.social.clone()]);
    assert!(footer.contains(&content.practitioner.profession));
    assert!(footer.contains(&format!(
        "© {} Todos os direitos reservados.",
        chrono::Utc::now().year()
    )));
}
