//! Inline SVG icons.
//!
//! All paths are drawn on a 256x256 grid so they share one `viewBox`.

use leptos::prelude::*;

use crate::types::Glyph;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CLOSE size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon for a [`Glyph`].
#[component]
pub fn GlyphIcon(
    /// Which glyph to draw
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
) -> impl IntoView {
    view! { <Icon path=glyph_path(glyph) size=size class="glyph" /> }
}

/// SVG path for a glyph.
pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Tooth => ICON_TOOTH,
        Glyph::Heart => ICON_HEART,
        Glyph::Smile => ICON_SMILE,
        Glyph::Shield => ICON_SHIELD,
        Glyph::Star => ICON_STAR,
        Glyph::Sparkle => ICON_SPARKLE,
        Glyph::Check => ICON_CHECK,
        Glyph::Baby => ICON_BABY,
    }
}

// =============================================================================
// Glyphs
// =============================================================================

/// Molar
pub const ICON_TOOTH: &str = "M80,32C48,32,32,56,32,88c0,40,16,72,24,112,4,20,12,32,24,32s16-24,20-48c4-20,12-32,28-32s24,12,28,32c4,24,8,48,20,48s20-12,24-32c8-40,24-72,24-112,0-32-16-56-48-56-20,0-32,8-48,8S100,32,80,32Z";

/// Heart
pub const ICON_HEART: &str = "M128,216S24,160,24,94A50,50,0,0,1,128,70a50,50,0,0,1,104,24C232,160,128,216,128,216Z";

/// Smiling face
pub const ICON_SMILE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24ZM92,96a12,12,0,1,1-12,12A12,12,0,0,1,92,96Zm72,0a12,12,0,1,1-12,12A12,12,0,0,1,164,96Zm12.5,62.5a56,56,0,0,1-97,0,8,8,0,0,1,13.9-8,40,40,0,0,0,69.2,0,8,8,0,0,1,13.9,8Z";

/// Shield
pub const ICON_SHIELD: &str = "M40,56l88-32,88,32v56c0,64-40,104-88,120C80,216,40,176,40,112Z";

/// Star
pub const ICON_STAR: &str = "M128,24l30,72,78,6-60,50,19,76-67-41-67,41,19-76L20,102l78-6Z";

/// Sparkle
pub const ICON_SPARKLE: &str = "M128,16l24,88,88,24-88,24-24,88-24-88L16,128l88-24Z";

/// Check mark in a circle
pub const ICON_CHECK: &str = "M128,24A104,104,0,1,0,232,128,104,104,0,0,0,128,24Zm45.66,85.66-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35a8,8,0,0,1,11.32,11.32Z";

/// Round face with a curl on top
pub const ICON_BABY: &str = "M128,24A104,104,0,1,0,232,128,104,104,0,0,0,128,24ZM100,120a12,12,0,1,1,12-12A12,12,0,0,1,100,120Zm56,0a12,12,0,1,1,12-12A12,12,0,0,1,156,120Zm-28,64a36,36,0,0,1-31.2-18,8,8,0,0,1,13.9-8,20,20,0,0,0,34.6,0,8,8,0,0,1,13.9,8A36,36,0,0,1,128,184ZM128,40a16,16,0,0,0-16,16,8,8,0,0,1-16,0,32,32,0,0,1,32-32,8,8,0,0,1,0,16Z";

// =============================================================================
// Controls
// =============================================================================

/// X mark (lightbox close)
pub const ICON_CLOSE: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Chat bubble (messaging CTA)
pub const ICON_CHAT: &str = "M128,32A96,96,0,0,0,44.7,175.6L32.4,212.5a12,12,0,0,0,15.1,15.1l36.9-12.3A96,96,0,1,0,128,32Z";

/// Camera outline (social profile link)
pub const ICON_INSTAGRAM: &str = "M176,24H80A56,56,0,0,0,24,80v96a56,56,0,0,0,56,56h96a56,56,0,0,0,56-56V80A56,56,0,0,0,176,24Zm40,152a40,40,0,0,1-40,40H80a40,40,0,0,1-40-40V80A40,40,0,0,1,80,40h96a40,40,0,0,1,40,40ZM128,80a48,48,0,1,0,48,48A48,48,0,0,0,128,80Zm0,80a32,32,0,1,1,32-32A32,32,0,0,1,128,160Zm64-84a12,12,0,1,1-12-12A12,12,0,0,1,192,76Z";

/// Map pin (location link)
pub const ICON_MAP_PIN: &str = "M128,16a88.1,88.1,0,0,0-88,88c0,75.3,80,132.2,83.4,134.6a8,8,0,0,0,9.2,0C136,236.2,216,179.3,216,104A88.1,88.1,0,0,0,128,16Zm0,56a32,32,0,1,1-32,32A32,32,0,0,1,128,72Z";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn every_glyph_has_its_own_path() {
        let glyphs = [
            Glyph::Tooth,
            Glyph::Heart,
            Glyph::Smile,
            Glyph::Shield,
            Glyph::Star,
            Glyph::Sparkle,
            Glyph::Check,
            Glyph::Baby,
        ];
        let mut paths: Vec<_> = glyphs.iter().map(|g| glyph_path(*g)).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), glyphs.len());
    }

    #[test]
    fn icon_renders_svg_with_path() {
        let html = view! { <Icon path=ICON_HEART size="16" /> }.to_html();
        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"width="16""#));
        assert!(html.contains(ICON_HEART));
    }
}
