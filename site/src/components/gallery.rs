//! Thumbnail grid. Each thumbnail asks the root view to enlarge it.

use leptos::prelude::*;

use super::stagger;

/// Grid of tappable thumbnails in the order given.
#[component]
pub fn Gallery(
    /// Image URLs in display order
    images: Vec<String>,
    /// Alt text prefix; the 1-based position is appended
    alt: &'static str,
    /// Label laid over every thumbnail
    #[prop(optional)]
    hint: Option<&'static str>,
    /// Invoked with the image URL when a thumbnail is tapped
    on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="gallery-grid">
            {images
                .into_iter()
                .enumerate()
                .map(|(idx, src)| {
                    let target = src.clone();
                    view! {
                        <button
                            type="button"
                            class="gallery-thumb reveal"
                            style=stagger(idx)
                            data-index=idx.to_string()
                            on:click=move |_| on_open.run(target.clone())
                        >
                            <img src=src alt=format!("{} {}", alt, idx + 1) loading="lazy" />
                            {hint.map(|text| view! { <span class="gallery-hint">{text}</span> })}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
