//! Lightbox overlay and the reactive handle that owns its state.

use leptos::prelude::*;

use super::{Icon, ICON_CLOSE};
use crate::lightbox::LightboxState;

/// Reactive owner of [`LightboxState`].
///
/// Created by the root view. Children never see the controller itself, only
/// the callbacks built from it.
#[derive(Clone, Copy, Debug)]
pub struct LightboxController {
    state: RwSignal<LightboxState>,
}

impl LightboxController {
    /// Controller starting closed, as every browser session does.
    pub fn new() -> Self {
        Self::with_state(LightboxState::Closed)
    }

    /// Controller starting from a given state (prerendering an open image).
    pub fn with_state(state: LightboxState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Enlarge `image`, replacing whatever is shown.
    pub fn activate_thumbnail(&self, image: String) {
        self.state.update(|s| s.activate_thumbnail(image));
    }

    /// Dismiss the overlay. No-op while closed.
    pub fn activate_close(&self) {
        self.state.update(LightboxState::activate_close);
    }

    /// Current state (tracked).
    pub fn state(&self) -> LightboxState {
        self.state.get()
    }

    /// Callback handed to galleries.
    pub fn open_callback(self) -> Callback<String> {
        Callback::new(move |image: String| self.activate_thumbnail(image))
    }

    /// Callback handed to the overlay.
    pub fn close_callback(self) -> Callback<()> {
        Callback::new(move |_: ()| self.activate_close())
    }
}

impl Default for LightboxController {
    fn default() -> Self {
        Self::new()
    }
}

/// Full-viewport overlay showing one enlarged image.
///
/// Any click inside the overlay closes it; the close button is inside the
/// overlay, so its clicks bubble to the same handler.
#[component]
pub fn LightboxOverlay(
    /// URL of the enlarged image
    #[prop(into)]
    src: String,
    /// Invoked on any click inside the overlay
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label="Enlarged photo"
            on:click=move |_| on_close.run(())
        >
            <button type="button" class="lightbox-close" aria-label="Close">
                <Icon path=ICON_CLOSE size="28" />
            </button>
            <img class="lightbox-image" src=src alt="Enlarged photo" />
        </div>
    }
}

/// Renders the overlay while the controller is open and nothing otherwise.
#[component]
pub fn Lightbox(
    /// State owner shared with the galleries
    controller: LightboxController,
) -> impl IntoView {
    let on_close = controller.close_callback();

    move || {
        controller
            .state()
            .image()
            .map(|src| view! { <LightboxOverlay src=src.to_string() on_close=on_close /> })
    }
}
