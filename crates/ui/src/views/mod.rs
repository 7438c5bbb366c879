mod popups;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use popups::{PopupCard, PopupLayer};
pub use quiz::QuizPanel;
