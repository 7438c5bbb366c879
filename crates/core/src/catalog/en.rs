use super::{RawQuestion, build};
use crate::model::{LocalizedContent, QuestionError, QuizContent};

const QUESTIONS: [RawQuestion; 10] = [
    ("How many days are there in a leap year?", ["365", "366", "364"], 1),
    ("How many letters are in the word 'butterfly'?", ["10", "12", "13"], 2),
    ("What is 15 + 7 – 5?", ["16", "18", "17"], 2),
    ("How many hours are there in a day?", ["24", "25", "23"], 0),
    ("Which month has 28 days?", ["February", "All months", "March"], 1),
    ("What color is made by mixing blue and yellow?", ["Green", "Purple", "Orange"], 0),
    ("How many continents are there on Earth?", ["5", "6", "7"], 2),
    (
        "How many times does the letter 'e' appear in the word 'elephant'?",
        ["1", "2", "3"],
        1,
    ),
    ("What is the third digit in the number 7315?", ["3", "1", "7"], 1),
    ("What is the result of 6 × 7?", ["42", "48", "63"], 0),
];

pub(super) fn content() -> Result<QuizContent, QuestionError> {
    let strings = LocalizedContent {
        title: "Chaos Quiz Challenge".into(),
        subtitle: "Let's do a simple test! You have one minute. Good luck!".into(),
        inactivity_warning: "Quiz will restart after {seconds} seconds of inactivity!".into(),
        start_button: "Start Quiz".into(),
        score_text: "Your Score:".into(),
        out_of: "out of".into(),
        perfect_score: "Perfect score! You're amazing! 🌟".into(),
        good_score: "Well done! Keep practicing! 👏".into(),
        encouragement: "Keep trying, you'll do better next time! 💪".into(),
        try_again: "Try Again".into(),
        question_label: "Question".into(),
        score_label: "Score".into(),
        time_until_reset: "Time until reset".into(),
    };
    build(strings, &QUESTIONS)
}
