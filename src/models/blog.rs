use super::Locale;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: i64,
    pub slug: String,
    pub language: Locale,
    pub title: String,
    pub excerpt: String,
    pub cover_url: Option<String>,
    pub published_at: Option<String>,
    pub created_at: String,
}

/// Listing shape served by `GET /api/blog`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPreview {
    pub slug: String,
    pub language: Locale,
    pub title: String,
    pub excerpt: String,
    pub cover_url: Option<String>,
    pub published_at: String,
}
