// Pediatric dentist landing page - browser entry point

use leptos::prelude::*;
use smile_site::page::LandingPage;
use smile_site::styles::SITE_CSS;
use smile_site::types::SiteContent;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    match SiteContent::builtin() {
        Ok(content) => {
            web_sys::console::log_1(&JsValue::from_str(&format!(
                "[smile-landing] {} - {} photos",
                content.practitioner.display_name,
                content.images.result_images.len() + content.images.happy_patient_images.len()
            )));
            leptos::mount::mount_to_body(move || view! { <App content=content /> });
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "[smile-landing] invalid site content: {err}"
            )));
        }
    }
}

#[component]
fn App(content: SiteContent) -> impl IntoView {
    view! {
        <style>{SITE_CSS}</style>
        <LandingPage content=content />
    }
}
