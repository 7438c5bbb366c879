#![forbid(unsafe_code)]

pub mod activity;
pub mod clock;
pub mod error;
pub mod popups;
pub mod quiz;
pub mod quiz_loop;
pub mod schedule;

pub use quiz_core::Clock;

pub use activity::{ActivityHub, ActivityKind, ActivitySubscription};
pub use clock::SessionClock;
pub use error::QuizError;
pub use popups::PopupSpawner;
pub use quiz::{AnswerOutcome, QuizEngine};
pub use quiz_loop::{QuizLoopService, QuizSnapshot};
pub use schedule::RecurringTask;
