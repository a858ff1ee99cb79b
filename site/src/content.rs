//! Loading and validating site content.
//!
//! The page content ships as `content.toml`, embedded into the binary at
//! compile time. It is parsed and checked once at startup; after that the
//! resulting [`SiteContent`] is never mutated.

use thiserror::Error;
use url::Url;

use crate::types::SiteContent;

/// Content compiled into the crate.
pub const BUILTIN_CONTENT: &str = include_str!("../content.toml");

/// Why a content document was rejected.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document is not valid TOML or does not match the content schema.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required text field is empty or whitespace.
    #[error("site content field `{field}` must not be empty")]
    EmptyField {
        /// Dotted path of the field
        field: String,
    },

    /// An outbound link is not an absolute http(s) URL.
    #[error("site content field `{field}` is not a valid link ({value}): {reason}")]
    InvalidUrl {
        /// Dotted path of the field
        field: String,
        /// Rejected value
        value: String,
        /// Parser or scheme complaint
        reason: String,
    },
}

impl SiteContent {
    /// Parse the embedded `content.toml`.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// Parse and validate a TOML content document.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;

        tracing::info!(
            practitioner = %content.practitioner.display_name,
            specialties = content.practitioner.specialties.len(),
            result_images = content.images.result_images.len(),
            happy_patient_images = content.images.happy_patient_images.len(),
            "site content loaded"
        );
        Ok(content)
    }

    /// Check every invariant of the profile and image data.
    ///
    /// Text fields must be non-empty. Outbound links must be absolute
    /// `http`/`https` URLs. Image URLs only need to be non-empty: the browser
    /// owns everything about fetching them.
    pub fn validate(&self) -> Result<(), ContentError> {
        let p = &self.practitioner;
        require_text("practitioner.display_name", &p.display_name)?;
        require_text("practitioner.profession", &p.profession)?;
        require_text("practitioner.city", &p.city)?;
        require_link("practitioner.links.messaging", &p.links.messaging)?;
        require_link("practitioner.links.social", &p.links.social)?;
        require_link("practitioner.links.map", &p.links.map)?;
        for (idx, specialty) in p.specialties.iter().enumerate() {
            require_text(&format!("practitioner.specialties[{idx}].label"), &specialty.label)?;
        }

        let images = &self.images;
        require_text("images.hero_image", &images.hero_image)?;
        for (idx, src) in images.result_images.iter().enumerate() {
            require_text(&format!("images.result_images[{idx}]"), src)?;
        }
        for (idx, src) in images.happy_patient_images.iter().enumerate() {
            require_text(&format!("images.happy_patient_images[{idx}]"), src)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn require_link(field: &str, value: &str) -> Result<(), ContentError> {
    require_text(field, value)?;

    let invalid = |reason: String| ContentError::InvalidUrl {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(()),
        "http" | "https" => Err(invalid("missing host".to_string())),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}
