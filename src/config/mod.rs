use crate::models::Locale;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub seo: SeoConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Per-locale SEO metadata. Locales without a section fall back to the
/// Polish one; if even that is missing, handlers fall back to `[site]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeoConfig {
    pub pl: Option<SeoMeta>,
    pub en: Option<SeoMeta>,
    pub uk: Option<SeoMeta>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub og_image: Option<String>,
}

impl SeoConfig {
    pub fn for_locale(&self, locale: Locale) -> Option<&SeoMeta> {
        let exact = match locale {
            Locale::Pl => None,
            Locale::En => self.en.as_ref(),
            Locale::Uk => self.uk.as_ref(),
        };
        exact.or(self.pl.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Root directory served under `/media`. Route folders
    /// (`gallery`, `students-gallery`, ...) live directly below it.
    pub root: String,
    /// Subdirectory of `root` holding generated responsive variants.
    #[serde(default = "default_processed_dir")]
    pub processed_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_language() -> String {
    "pl".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_processed_dir() -> String {
    "processed".to_string()
}

fn default_page_size() -> usize {
    12
}

fn default_max_page_size() -> usize {
    100
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Are you in a clipper site directory?",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.default_page_size == 0 {
            anyhow::bail!("api.default_page_size must be greater than 0");
        }
        if self.api.max_page_size < self.api.default_page_size {
            anyhow::bail!("api.max_page_size must be at least api.default_page_size");
        }
        if self.media.root.is_empty() {
            anyhow::bail!("media.root must not be empty");
        }
        if self.media.processed_dir.is_empty() || self.media.processed_dir.contains('/') {
            anyhow::bail!("media.processed_dir must be a single directory name");
        }
        Ok(())
    }
}
