mod content;
mod ids;
mod language;
mod popup;
mod question;
mod session;

pub use content::{CatalogError, ContentBundle, LocalizedContent, QuizContent, SECONDS_PLACEHOLDER};
pub use ids::{PopupId, PopupIdGenerator};
pub use language::{Language, LanguageError};
pub use popup::{Popup, Viewport};
pub use question::{OPTION_COUNT, Question, QuestionCatalog, QuestionError};
pub use session::{ScoreClass, SessionEvent, SessionState};
