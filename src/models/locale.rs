use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Site locales. Polish is the primary language and the fallback for
/// every localized surface (SEO metadata, gallery captions, tag names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pl,
    En,
    Uk,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Pl, Locale::En, Locale::Uk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pl => "pl",
            Self::En => "en",
            Self::Uk => "uk",
        }
    }

    /// Unsupported codes fall back to Polish.
    pub fn parse_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pl" => Ok(Self::Pl),
            "en" => Ok(Self::En),
            "uk" => Ok(Self::Uk),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
