//! Site data types.
//!
//! Two immutable structures feed every section of the page:
//!
//! - [`Practitioner`] - who the page is about and where its calls-to-action lead
//! - [`ImageCatalog`] - hero, result and happy-patient photos
//!
//! Both are bundled into [`SiteContent`], built once at startup (see
//! [`crate::content`]) and passed down to components as plain props.
//!
//! # Example
//!
//! ```rust
//! use smile_site::types::{Destination, Glyph, ImageCatalog, OutboundLinks, Practitioner, SiteContent, Specialty};
//!
//! let content = SiteContent {
//!     practitioner: Practitioner {
//!         display_name: "Dra. Laura Melo".into(),
//!         profession: "Dentista, Odontopediatra".into(),
//!         city: "Pouso Alegre, MG".into(),
//!         links: OutboundLinks {
//!             messaging: "https://api.whatsapp.com/message/EXAMPLE".into(),
//!             social: "https://www.instagram.com/example/".into(),
//!             map: "https://maps.app.goo.gl/example".into(),
//!         },
//!         specialties: vec![Specialty { icon: Glyph::Tooth, label: "Pacientes especiais".into() }],
//!     },
//!     images: ImageCatalog {
//!         hero_image: "https://i.imgur.com/sgWDuh7.png".into(),
//!         ..Default::default()
//!     },
//! };
//!
//! assert_eq!(content.practitioner.links.resolve(Destination::Map), "https://maps.app.goo.gl/example");
//! ```

use serde::{Deserialize, Serialize};

/// Icon shown next to a specialty label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Molar outline
    #[default]
    Tooth,
    /// Filled heart
    Heart,
    /// Smiling face
    Smile,
    /// Shield (safety)
    Shield,
    /// Five-point star
    Star,
    /// Four-point sparkle
    Sparkle,
    /// Check mark in a circle
    Check,
    /// Baby face
    Baby,
}

/// One short descriptor of what the practitioner does well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    /// Icon rendered before the label
    pub icon: Glyph,
    /// Short descriptor text
    pub label: String,
}

/// The three places a call-to-action may lead to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Chat with the practitioner in the messaging app
    Messaging,
    /// Social-media profile
    Social,
    /// Clinic location on a map
    Map,
}

impl Destination {
    /// All destinations, in footer order.
    pub const ALL: [Destination; 3] = [Destination::Messaging, Destination::Social, Destination::Map];
}

/// Outbound URLs. Every link on the page resolves through here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundLinks {
    /// Messaging-app deep link that opens a chat with the practitioner
    pub messaging: String,
    /// Social-media profile
    pub social: String,
    /// Clinic location on a map service
    pub map: String,
}

impl OutboundLinks {
    /// URL for a destination.
    pub fn resolve(&self, destination: Destination) -> &str {
        match destination {
            Destination::Messaging => &self.messaging,
            Destination::Social => &self.social,
            Destination::Map => &self.map,
        }
    }
}

/// Practitioner profile.
///
/// `specialties` keeps declaration order; the first entry renders first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practitioner {
    /// Name as shown in headings
    pub display_name: String,
    /// Profession line, e.g. "Dentista, Odontopediatra"
    pub profession: String,
    /// City (and state) of the clinic
    pub city: String,
    /// Outbound destinations
    pub links: OutboundLinks,
    /// Specialties in display order
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

/// Photo URLs, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCatalog {
    /// Portrait shown in the hero
    pub hero_image: String,
    /// Before/after treatment photos
    #[serde(default)]
    pub result_images: Vec<String>,
    /// Photos of children after their visits
    #[serde(default)]
    pub happy_patient_images: Vec<String>,
}

/// Everything the page renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Profile data
    pub practitioner: Practitioner,
    /// Image data
    pub images: ImageCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_destination_to_its_own_link() {
        let links = OutboundLinks {
            messaging: "https://t.me/a".into(),
            social: "https://instagram.com/b".into(),
            map: "https://maps.google.com/?q=c".into(),
        };

        assert_eq!(links.resolve(Destination::Messaging), "https://t.me/a");
        assert_eq!(links.resolve(Destination::Social), "https://instagram.com/b");
        assert_eq!(links.resolve(Destination::Map), "https://maps.google.com/?q=c");
    }

    #[test]
    fn glyph_names_are_kebab_case() {
        let parsed: Specialty = toml::from_str("icon = \"sparkle\"\nlabel = \"Whitening\"").unwrap();
        assert_eq!(parsed.icon, Glyph::Sparkle);
        assert_eq!(parsed.label, "Whitening");
    }
}
