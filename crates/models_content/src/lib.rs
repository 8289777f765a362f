//! The operator-editable content bundle: hero media, highlights, the villa
//! catalog, packages and branding copy. A single versioned document that the
//! CMS surface replaces wholesale on save.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod seed;

/// Kind of a hero carousel asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HeroAssetKind {
    Video,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeroAsset {
    #[serde(rename = "type")]
    pub kind: HeroAssetKind,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Highlight {
    pub title: String,
    pub category: String,
    pub img: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum VillaCategory {
    Beach,
    Water,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Villa {
    pub id: String,
    pub title: String,
    pub category: VillaCategory,
    pub size: String,
    pub features: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Package {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub features: Vec<String>,
}

/// Branding copy rendered across the marketing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub resort_name: String,
    pub partner_name: String,
    pub hero_headline: String,
    pub hero_subheadline: String,
    pub trust_signal: String,
    #[serde(rename = "primaryCTA")]
    pub primary_cta: String,
}

/// The whole editable document. `revision` is bumped on every accepted save;
/// a save carrying a stale revision is rejected so concurrent operator edits
/// are not silently discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    #[serde(default)]
    pub revision: u64,
    pub hero_assets: Vec<HeroAsset>,
    pub highlights: Vec<Highlight>,
    pub villas: Vec<Villa>,
    pub packages: Vec<Package>,
    #[serde(rename = "siteBranding")]
    pub branding: Branding,
}

impl Default for ContentBundle {
    fn default() -> Self {
        seed::initial_content()
    }
}

impl ContentBundle {
    /// Looks a villa up by catalog id.
    pub fn villa(&self, id: &str) -> Option<&Villa> {
        self.villas.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_starts_at_revision_zero() {
        let bundle = ContentBundle::default();
        assert_eq!(bundle.revision, 0);
        assert!(!bundle.hero_assets.is_empty());
        assert!(!bundle.villas.is_empty());
    }

    #[test]
    fn test_seed_contains_the_flagship_villa() {
        let bundle = ContentBundle::default();
        let villa = bundle.villa("pool-beach-villa").unwrap();
        assert_eq!(villa.title, "Pool Beach Villa");
        assert_eq!(villa.category, VillaCategory::Beach);
    }

    #[test]
    fn test_round_trips_through_json() {
        let bundle = ContentBundle::default();
        let json = serde_json::to_string(&bundle).unwrap();
        let back: ContentBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }
}
