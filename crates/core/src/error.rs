use thiserror::Error;

use crate::config::ConfigError;
use crate::model::{CatalogError, LanguageError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Language(#[from] LanguageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
