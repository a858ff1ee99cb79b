//! Leaf Leptos components shared by the page sections.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (SSR only)
//! └── LandingPage (owns LightboxController)
//!     ├── sections::* (nine content blocks, in page order)
//!     │   ├── SectionWrapper / SectionHeader
//!     │   ├── Cta
//!     │   └── Gallery -> on_open callback
//!     └── Lightbox -> LightboxOverlay -> on_close callback
//! ```
//!
//! `LandingPage` and `SiteDocument` live in [`crate::page`].

mod cta;
mod gallery;
mod icons;
mod lightbox;
mod section;

pub use cta::{Cta, CtaVariant};
pub use gallery::Gallery;
pub use icons::*;
pub use lightbox::{Lightbox, LightboxController, LightboxOverlay};
pub use section::{stagger, SectionHeader, SectionTone, SectionWrapper};
