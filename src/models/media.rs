use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Section of the site a scanned folder feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaRoute {
    Gallery,
    StudentsGallery,
    SuccessStories,
    Instructors,
}

impl MediaRoute {
    pub const ALL: [MediaRoute; 4] = [
        MediaRoute::Gallery,
        MediaRoute::StudentsGallery,
        MediaRoute::SuccessStories,
        MediaRoute::Instructors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::StudentsGallery => "students-gallery",
            Self::SuccessStories => "success-stories",
            Self::Instructors => "instructors",
        }
    }
}

impl FromStr for MediaRoute {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gallery" => Ok(Self::Gallery),
            "students-gallery" => Ok(Self::StudentsGallery),
            "success-stories" => Ok(Self::SuccessStories),
            "instructors" => Ok(Self::Instructors),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for MediaRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl FromStr for MediaKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file found by a seed/sync scan. Never updated after insert.
#[derive(Debug, Clone, Serialize)]
pub struct MediaFile {
    pub id: i64,
    pub route: MediaRoute,
    pub filename: String,
    pub kind: MediaKind,
    pub url: String,
    pub created_at: String,
}
