use super::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Encoded format of a responsive variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    Avif,
    Webp,
    Jpg,
}

impl AssetFormat {
    pub const ALL: [AssetFormat; 3] = [AssetFormat::Avif, AssetFormat::Webp, AssetFormat::Jpg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Webp => "webp",
            Self::Jpg => "jpg",
        }
    }

    /// File extension, identical to the wire name.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for AssetFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avif" => Ok(Self::Avif),
            "webp" => Ok(Self::Webp),
            "jpg" => Ok(Self::Jpg),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical photo set. Intrinsic dimensions are those of the original
/// upload; variants scale down from there.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub id: i64,
    pub slug: String,
    pub width: i64,
    pub height: i64,
    pub blur_data: String,
    pub created_at: String,
}

/// One concrete file variant backing an item. `path` is relative to the
/// media root; `url` is what clients fetch.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryAsset {
    pub id: i64,
    pub item_id: i64,
    pub format: AssetFormat,
    pub width: i64,
    pub path: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryI18n {
    pub item_id: i64,
    pub locale: Locale,
    pub title: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagWithCount {
    pub slug: String,
    pub name: String,
    pub count: i64,
}

/// Per-format srcset strings, e.g. `/media/...-400w.avif 400w, ...`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Srcsets {
    pub avif: String,
    pub webp: String,
    pub jpg: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryPageItem {
    pub slug: String,
    pub title: String,
    pub alt: String,
    pub w: i64,
    pub h: i64,
    pub srcsets: Srcsets,
    #[serde(rename = "blurData")]
    pub blur_data: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    pub items: Vec<GalleryPageItem>,
    pub next_page: Option<usize>,
    pub total_items: i64,
    pub current_page: usize,
    pub page_size: usize,
}
