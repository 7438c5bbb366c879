mod popup_vm;
mod quiz_vm;
mod time_fmt;

pub use popup_vm::{PopupVm, map_popups};
pub use quiz_vm::{
    QuestionScreenVm, QuizIntent, QuizScreen, ScoreScreenVm, StartScreenVm,
};
pub use time_fmt::format_countdown;
