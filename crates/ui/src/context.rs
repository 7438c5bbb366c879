use std::sync::Arc;

use quiz_core::model::{ContentBundle, LocalizedContent, Language};
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> QuizLoopService;
    fn content(&self) -> Arc<ContentBundle>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: QuizLoopService,
    content: Arc<ContentBundle>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            content: app.content(),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> QuizLoopService {
        self.quiz_loop.clone()
    }

    #[must_use]
    pub fn strings(&self, language: Language) -> &LocalizedContent {
        self.content.strings(language)
    }

    /// Rendered popup edge length in pixels.
    #[must_use]
    pub fn popup_size(&self) -> f64 {
        self.quiz_loop.config().spawn.popup_size()
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
