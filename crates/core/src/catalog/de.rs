use super::{RawQuestion, build};
use crate::model::{LocalizedContent, QuestionError, QuizContent};

const QUESTIONS: [RawQuestion; 10] = [
    ("Wie viele Tage hat ein Schaltjahr?", ["365", "366", "364"], 1),
    ("Wie viele Buchstaben hat das Wort „Schmetterling“?", ["10", "12", "13"], 2),
    ("Was ist 15 + 7 – 5?", ["16", "18", "17"], 2),
    ("Wie viele Stunden hat ein Tag?", ["24", "25", "23"], 0),
    ("Welcher Monat hat 28 Tage?", ["Februar", "Alle Monate", "März"], 1),
    ("Welche Farbe entsteht, wenn man Blau und Gelb mischt?", ["Grün", "Lila", "Orange"], 0),
    ("Wie viele Kontinente gibt es auf der Erde?", ["5", "6", "7"], 2),
    ("Wie oft kommt der Buchstabe „e“ im Wort „Elefant“ vor?", ["1", "2", "3"], 1),
    ("Was ist die dritte Ziffer in der Zahl 7315?", ["3", "1", "7"], 1),
    ("Was ist das Ergebnis von 6 × 7?", ["42", "48", "63"], 0),
];

pub(super) fn content() -> Result<QuizContent, QuestionError> {
    let strings = LocalizedContent {
        title: "Chaos-Quiz-Challenge".into(),
        subtitle: "Machen wir einen einfachen Test! Sie haben eine Minute Zeit. Viel Glück!".into(),
        inactivity_warning: "Das Quiz wird nach {seconds} Sekunden Inaktivität neu gestartet!".into(),
        start_button: "Quiz starten".into(),
        score_text: "Dein Ergebnis:".into(),
        out_of: "von".into(),
        perfect_score: "Perfekte Punktzahl! Du bist fantastisch! 🌟".into(),
        good_score: "Gut gemacht! Übe weiter! 👏".into(),
        encouragement: "Bleib dran, beim nächsten Mal wird es besser! 💪".into(),
        try_again: "Erneut versuchen".into(),
        question_label: "Frage".into(),
        score_label: "Punkte".into(),
        time_until_reset: "Zeit bis zum Neustart".into(),
    };
    build(strings, &QUESTIONS)
}
