//! Tap-to-enlarge image viewer state.
//!
//! ```text
//! Closed  --activate_thumbnail(url)--> Open(url)
//! Open(_) --activate_thumbnail(url)--> Open(url)
//! Open(_) --activate_close----------> Closed
//! Closed  --activate_close----------> Closed
//! ```
//!
//! There is no terminal state; a session toggles indefinitely.

/// Which image, if any, is currently enlarged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    /// Nothing enlarged; the overlay is not rendered at all.
    #[default]
    Closed,
    /// One image enlarged over the page.
    Open {
        /// URL of the enlarged image
        image: String,
    },
}

impl LightboxState {
    /// A thumbnail was tapped. Replaces any image already shown.
    pub fn activate_thumbnail(&mut self, image: impl Into<String>) {
        let image = image.into();
        tracing::debug!(%image, replacing = self.is_open(), "lightbox open");
        *self = LightboxState::Open { image };
    }

    /// The background or close control was tapped.
    pub fn activate_close(&mut self) {
        if let LightboxState::Open { image } = self {
            tracing::debug!(%image, "lightbox close");
        }
        *self = LightboxState::Closed;
    }

    /// URL of the enlarged image.
    pub fn image(&self) -> Option<&str> {
        match self {
            LightboxState::Open { image } => Some(image),
            LightboxState::Closed => None,
        }
    }

    /// Whether an image is enlarged.
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    enum Event {
        Thumb(&'static str),
        Close,
    }

    fn open(url: &str) -> LightboxState {
        LightboxState::Open { image: url.into() }
    }

    #[test]
    fn starts_closed() {
        let state = LightboxState::default();
        assert_eq!(state, LightboxState::Closed);
        assert_eq!(state.image(), None);
        assert!(!state.is_open());
    }

    #[test]
    fn thumbnail_opens_from_closed() {
        let mut state = LightboxState::Closed;
        state.activate_thumbnail("A");
        assert_eq!(state, open("A"));
        assert_eq!(state.image(), Some("A"));
    }

    #[test]
    fn second_thumbnail_replaces_image_without_closing() {
        let mut state = open("A");
        state.activate_thumbnail("B");
        assert_eq!(state, open("B"));
    }

    #[test]
    fn close_while_closed_is_noop() {
        let mut state = LightboxState::Closed;
        state.activate_close();
        state.activate_close();
        assert_eq!(state, LightboxState::Closed);
    }

    #[test]
    fn follows_transition_table_for_event_sequence() {
        let events = [
            Event::Close,
            Event::Thumb("r1"),
            Event::Thumb("r2"),
            Event::Thumb("r2"),
            Event::Close,
            Event::Close,
            Event::Thumb("h0"),
        ];
        let expected = [
            LightboxState::Closed,
            open("r1"),
            open("r2"),
            open("r2"),
            LightboxState::Closed,
            LightboxState::Closed,
            open("h0"),
        ];

        let mut state = LightboxState::default();
        for (event, want) in events.into_iter().zip(expected) {
            match event {
                Event::Thumb(url) => state.activate_thumbnail(url),
                Event::Close => state.activate_close(),
            }
            assert_eq!(state, want);
        }
    }
}
