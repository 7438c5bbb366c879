use dioxus::prelude::*;

use crate::vm::{QuestionScreenVm, QuizIntent, QuizScreen, ScoreScreenVm, StartScreenVm};

#[component]
pub fn QuizPanel(screen: QuizScreen, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-panel",
            match screen {
                QuizScreen::Start(vm) => rsx! { StartScreen { vm, on_intent } },
                QuizScreen::Question(vm) => rsx! { QuestionScreen { vm, on_intent } },
                QuizScreen::Score(vm) => rsx! { ScoreScreen { vm, on_intent } },
            }
        }
    }
}

#[component]
fn StartScreen(vm: StartScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-start",
            div { class: "quiz-start__icon", "🧠" }
            button {
                class: "quiz-language",
                id: "quiz-language",
                r#type: "button",
                aria_label: "Toggle language",
                onclick: move |_| on_intent.call(QuizIntent::ToggleLanguage),
                span { class: "quiz-language__glyph", "文" }
                span { class: "quiz-language__badge", "{vm.language_badge}" }
            }
            h1 { class: "quiz-start__title", "{vm.title}" }
            p { class: "quiz-start__subtitle",
                "{vm.subtitle}"
                br {}
                span { class: "quiz-start__warning", "{vm.inactivity_warning}" }
            }
            button {
                class: "quiz-cta",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "{vm.start_label}"
            }
        }
    }
}

#[component]
fn QuestionScreen(vm: QuestionScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-question",
            header { class: "quiz-question__header",
                div { class: "quiz-question__meta",
                    span { class: "quiz-question__progress", "{vm.progress_label}" }
                    span { class: "quiz-question__score", "{vm.score_label}" }
                }
                span { class: "quiz-question__countdown", "{vm.countdown_label}" }
                h2 { class: "quiz-question__prompt", "{vm.prompt}" }
            }
            div { class: "quiz-options",
                for (index, option) in vm.options.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "quiz-option",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
                        "{option}"
                    }
                }
            }
        }
    }
}

#[component]
fn ScoreScreen(vm: ScoreScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-score",
            h2 { class: "quiz-score__icon", "🎉" }
            p { class: "quiz-score__headline", "{vm.headline}" }
            p { class: "quiz-score__message", "{vm.message}" }
            button {
                class: "quiz-cta",
                id: "quiz-try-again",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "{vm.try_again_label}"
            }
        }
    }
}
