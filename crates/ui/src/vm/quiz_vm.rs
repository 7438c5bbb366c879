use quiz_core::model::{LocalizedContent, ScoreClass, SessionState};
use services::QuizSnapshot;

use super::time_fmt::format_countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ToggleLanguage,
    Start,
    Answer(usize),
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartScreenVm {
    pub language_badge: &'static str,
    pub title: String,
    pub subtitle: String,
    pub inactivity_warning: String,
    pub start_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub progress_label: String,
    pub score_label: String,
    pub countdown_label: String,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreScreenVm {
    pub headline: String,
    pub message: String,
    pub try_again_label: String,
}

/// What the quiz panel shows for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Start(StartScreenVm),
    Question(QuestionScreenVm),
    Score(ScoreScreenVm),
}

impl QuizScreen {
    #[must_use]
    pub fn from_snapshot(snapshot: &QuizSnapshot, strings: &LocalizedContent) -> Self {
        match (snapshot.state, snapshot.question.as_ref()) {
            (SessionState::Running, Some(question)) => Self::Question(QuestionScreenVm {
                progress_label: format!(
                    "{} {}/{}",
                    strings.question_label,
                    snapshot.question_index + 1,
                    snapshot.question_count
                ),
                score_label: format!("{}: {}", strings.score_label, snapshot.score),
                countdown_label: format!(
                    "{}: {}",
                    strings.time_until_reset,
                    format_countdown(snapshot.remaining_secs)
                ),
                prompt: question.prompt().to_string(),
                options: question.options().to_vec(),
            }),
            (SessionState::Finished, _) => {
                let class = snapshot.classification.unwrap_or_else(|| {
                    ScoreClass::classify(snapshot.score, snapshot.question_count)
                });
                let message = match class {
                    ScoreClass::Perfect => &strings.perfect_score,
                    ScoreClass::Good => &strings.good_score,
                    ScoreClass::Encouragement => &strings.encouragement,
                };
                Self::Score(ScoreScreenVm {
                    headline: format!(
                        "{} {} {} {}",
                        strings.score_text, snapshot.score, strings.out_of, snapshot.question_count
                    ),
                    message: message.clone(),
                    try_again_label: strings.try_again.clone(),
                })
            }
            _ => Self::Start(StartScreenVm {
                language_badge: snapshot.language.badge(),
                title: strings.title.clone(),
                subtitle: strings.subtitle.clone(),
                inactivity_warning: strings.inactivity_warning_for(snapshot.inactivity_timeout_ms),
                start_label: strings.start_button.clone(),
            }),
        }
    }
}
