//! View models for search-result items.
//!
//! Three renditions of the same hit: the standard result row, the compact
//! row used in pickers, and the grid card. The computer and mobile variants
//! share one struct with a layout hint. All are read-only projections of a
//! [`Profile`].

use faculty_profiles_core::constants::PROFILES_LANDING_PATH;
use faculty_profiles_core::types::Profile;

/// Which responsive variant a row renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLayout {
    Computer,
    Mobile,
}

fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let kept: String = text.chars().take(length.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// The standard search-result row: photo, linked name, one-line biography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItemView {
    pub layout: ItemLayout,
    pub heading: String,
    pub detail_url: Option<String>,
    pub photo_url: Option<String>,
    pub description: Option<String>,
}

impl ResultItemView {
    #[must_use]
    pub fn from_profile(profile: &Profile, layout: ItemLayout) -> Self {
        Self {
            layout,
            heading: profile.full_name(),
            detail_url: profile.links.self_html.clone(),
            photo_url: profile.links.photo.clone(),
            description: profile.metadata.biography.clone(),
        }
    }
}

/// The compact row: same content, biography capped to fit one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactItemView {
    pub layout: ItemLayout,
    pub heading: String,
    pub detail_url: Option<String>,
    pub photo_url: Option<String>,
    pub description: Option<String>,
}

impl CompactItemView {
    #[must_use]
    pub fn from_profile(profile: &Profile, layout: ItemLayout) -> Self {
        Self {
            layout,
            heading: profile.full_name(),
            detail_url: profile.links.self_html.clone(),
            photo_url: profile.links.photo.clone(),
            description: profile
                .metadata
                .biography
                .as_deref()
                .map(|text| truncate(text, 50)),
        }
    }
}

/// The grid card: no photo, detail link derived from the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItemView {
    pub href: String,
    pub header: String,
    pub description: Option<String>,
}

impl GridItemView {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            href: format!(
                "{PROFILES_LANDING_PATH}/{}",
                profile.id.as_deref().unwrap_or_default()
            ),
            header: profile.full_name(),
            description: profile.metadata.biography.clone(),
        }
    }
}
