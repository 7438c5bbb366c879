use serde::{Deserialize, Serialize};

/// Lifecycle of one quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Lifecycle signal sent from the quiz to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Ended,
}

/// Feedback category shown with the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreClass {
    Perfect,
    Good,
    Encouragement,
}

impl ScoreClass {
    /// Perfect when every answer was right, good from half the questions
    /// upwards (ties count as good), encouragement below that.
    #[must_use]
    pub fn classify(score: u32, total: usize) -> Self {
        let score = u64::from(score);
        let total = total as u64;
        if score == total {
            ScoreClass::Perfect
        } else if score * 2 >= total {
            ScoreClass::Good
        } else {
            ScoreClass::Encouragement
        }
    }
}
