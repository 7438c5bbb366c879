mod engine;

pub use crate::error::QuizError;
pub use engine::{AnswerOutcome, QuizEngine};
