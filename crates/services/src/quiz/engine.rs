use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::config::QuizSettings;
use quiz_core::model::{
    ContentBundle, Language, LocalizedContent, OPTION_COUNT, Question, QuestionCatalog,
    ScoreClass, SessionEvent, SessionState,
};
use quiz_core::time::elapsed_ms;

use crate::error::QuizError;

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// `Some(SessionEvent::Ended)` when this answer finished the quiz.
    pub event: Option<SessionEvent>,
}

/// Drives one quiz session at a time: `Idle -> Running -> Finished -> Idle`,
/// with `Running -> Idle` on inactivity.
///
/// Timestamps are passed in by the caller so the engine stays deterministic.
/// Operations invoked from the wrong state return `QuizError` and change
/// nothing.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    content: Arc<ContentBundle>,
    settings: QuizSettings,
    language: Language,
    state: SessionState,
    current: usize,
    score: u32,
    last_interaction: DateTime<Utc>,
}

impl QuizEngine {
    #[must_use]
    pub fn new(content: Arc<ContentBundle>, settings: QuizSettings, now: DateTime<Utc>) -> Self {
        Self {
            content,
            settings,
            language: settings.default_language(),
            state: SessionState::Idle,
            current: 0,
            score: 0,
            last_interaction: now,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn last_interaction(&self) -> DateTime<Utc> {
        self.last_interaction
    }

    #[must_use]
    pub fn strings(&self) -> &LocalizedContent {
        self.content.strings(self.language)
    }

    fn questions(&self) -> &QuestionCatalog {
        self.content.questions(self.language)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// The question on screen; `None` unless a session is running.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.state == SessionState::Running {
            self.questions().get(self.current)
        } else {
            None
        }
    }

    /// True while activity should be tracked and the watchdog armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Feedback category for the final score; only available once finished.
    #[must_use]
    pub fn classification(&self) -> Option<ScoreClass> {
        (self.state == SessionState::Finished)
            .then(|| ScoreClass::classify(self.score, self.question_count()))
    }

    /// # Errors
    ///
    /// Returns `QuizError::AlreadyStarted` unless the engine is idle.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<SessionEvent, QuizError> {
        if self.state != SessionState::Idle {
            return Err(QuizError::AlreadyStarted);
        }
        self.state = SessionState::Running;
        self.current = 0;
        self.score = 0;
        self.last_interaction = now;
        Ok(SessionEvent::Started)
    }

    /// Answer the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotRunning` outside a running session and
    /// `QuizError::OptionOutOfRange` for an option the question does not have.
    pub fn answer(&mut self, option: usize, now: DateTime<Utc>) -> Result<AnswerOutcome, QuizError> {
        if option >= OPTION_COUNT {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                count: OPTION_COUNT,
            });
        }
        let correct = self
            .current_question()
            .ok_or(QuizError::NotRunning)?
            .is_correct(option);

        self.last_interaction = now;
        if correct {
            self.score += 1;
        }

        let next = self.current + 1;
        if next < self.question_count() {
            self.current = next;
            return Ok(AnswerOutcome {
                correct,
                event: None,
            });
        }

        // The index stays on the last question so it never reaches the count.
        self.state = SessionState::Finished;
        Ok(AnswerOutcome {
            correct,
            event: Some(SessionEvent::Ended),
        })
    }

    /// Reset every session field and return to idle. Valid from any state.
    pub fn restart(&mut self, now: DateTime<Utc>) -> SessionEvent {
        self.state = SessionState::Idle;
        self.current = 0;
        self.score = 0;
        self.last_interaction = now;
        SessionEvent::Ended
    }

    /// # Errors
    ///
    /// Returns `QuizError::LanguageLocked` once a session has started.
    pub fn toggle_language(&mut self) -> Result<Language, QuizError> {
        if self.state != SessionState::Idle {
            return Err(QuizError::LanguageLocked);
        }
        self.language = self.language.toggled();
        Ok(self.language)
    }

    /// Refresh the interaction timestamp. Returns false (and does nothing)
    /// outside a running session.
    pub fn record_activity(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_running() {
            return false;
        }
        self.last_interaction = now;
        true
    }

    /// Watchdog check: resets the session once the inactivity timeout has
    /// elapsed while running.
    pub fn check_inactivity(&mut self, now: DateTime<Utc>) -> Option<SessionEvent> {
        if !self.is_running() {
            return None;
        }
        if elapsed_ms(self.last_interaction, now) < self.settings.inactivity_timeout_ms() {
            return None;
        }
        Some(self.restart(now))
    }

    /// Whole seconds left before the watchdog fires, never negative.
    #[must_use]
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> u64 {
        self.settings
            .inactivity_timeout_ms()
            .saturating_sub(elapsed_ms(self.last_interaction, now))
            / 1000
    }
}
