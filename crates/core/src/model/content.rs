use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Language, QuestionCatalog};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no content for language {0}")]
    MissingLanguage(Language),

    #[error("content for language {0} given more than once")]
    DuplicateLanguage(Language),
}

/// Stands in for the inactivity timeout inside `inactivity_warning`.
pub const SECONDS_PLACEHOLDER: &str = "{seconds}";

/// UI strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedContent {
    pub title: String,
    pub subtitle: String,
    /// Template containing `SECONDS_PLACEHOLDER`.
    pub inactivity_warning: String,
    pub start_button: String,
    pub score_text: String,
    pub out_of: String,
    pub perfect_score: String,
    pub good_score: String,
    pub encouragement: String,
    pub try_again: String,
    pub question_label: String,
    pub score_label: String,
    pub time_until_reset: String,
}

impl LocalizedContent {
    /// The inactivity warning for a timeout, rounded up to whole seconds.
    #[must_use]
    pub fn inactivity_warning_for(&self, timeout_ms: u64) -> String {
        let seconds = timeout_ms.div_ceil(1000);
        self.inactivity_warning
            .replace(SECONDS_PLACEHOLDER, &seconds.to_string())
    }
}

/// Strings plus the ordered question catalog of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizContent {
    pub strings: LocalizedContent,
    pub questions: QuestionCatalog,
}

/// Content for every supported language.
///
/// Injected into the engine and the UI instead of living in globals, so both
/// can run against fixture data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBundle {
    english: QuizContent,
    german: QuizContent,
}

impl ContentBundle {
    #[must_use]
    pub fn new(english: QuizContent, german: QuizContent) -> Self {
        Self { english, german }
    }

    /// Build a bundle from `(language, content)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when a language is missing or repeated.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Language, QuizContent)>,
    ) -> Result<Self, CatalogError> {
        let mut by_language = HashMap::new();
        for (language, content) in entries {
            if by_language.insert(language, content).is_some() {
                return Err(CatalogError::DuplicateLanguage(language));
            }
        }
        let english = by_language
            .remove(&Language::English)
            .ok_or(CatalogError::MissingLanguage(Language::English))?;
        let german = by_language
            .remove(&Language::German)
            .ok_or(CatalogError::MissingLanguage(Language::German))?;
        Ok(Self::new(english, german))
    }

    #[must_use]
    pub fn content(&self, language: Language) -> &QuizContent {
        match language {
            Language::English => &self.english,
            Language::German => &self.german,
        }
    }

    #[must_use]
    pub fn strings(&self, language: Language) -> &LocalizedContent {
        &self.content(language).strings
    }

    #[must_use]
    pub fn questions(&self, language: Language) -> &QuestionCatalog {
        &self.content(language).questions
    }
}
