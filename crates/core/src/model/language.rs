use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported language code: {0}")]
    Unsupported(String),
}

/// The two supported UI languages.
///
/// English is the primary language, German the secondary one. German is the
/// default when nothing else is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    #[default]
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// Short label shown on the language toggle.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::German => "DE",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::German,
            Language::German => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "de" => Ok(Language::German),
            _ => Err(LanguageError::Unsupported(s.to_string())),
        }
    }
}
