use dioxus::prelude::*;
use quiz_core::model::{PopupId, Viewport};
use services::ActivityKind;

use crate::context::AppContext;
use crate::views::{PopupLayer, QuizPanel};
use crate::vm::{QuizIntent, QuizScreen, map_popups};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Chaos Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizStage {}
            }
        }
    }
}

/// Gradient backdrop, centred quiz panel and the popup overlay.
///
/// Mirrors the session service: every published snapshot lands in a signal,
/// and all user input goes back through the service.
#[component]
pub(crate) fn QuizStage() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let snapshot = use_signal(|| quiz_loop.snapshot());

    {
        let quiz_loop = quiz_loop.clone();
        use_future(move || {
            let quiz_loop = quiz_loop.clone();
            async move {
                let mut snapshot = snapshot;
                let mut updates = quiz_loop.subscribe();
                snapshot.set(updates.borrow_and_update().clone());
                while updates.changed().await.is_ok() {
                    let next = updates.borrow_and_update().clone();
                    snapshot.set(next);
                }
            }
        });
    }

    let dispatch_intent = {
        let quiz_loop = quiz_loop.clone();
        // Rejected intents are logged by the service and otherwise ignored.
        use_callback(move |intent: QuizIntent| match intent {
            QuizIntent::ToggleLanguage => {
                let _ = quiz_loop.toggle_language();
            }
            QuizIntent::Start => {
                let _ = quiz_loop.start();
            }
            QuizIntent::Answer(option) => {
                let _ = quiz_loop.answer(option);
            }
            QuizIntent::Restart => quiz_loop.restart(),
        })
    };
    let on_activity = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |kind: ActivityKind| {
            quiz_loop.signal_activity(kind);
        })
    };
    let on_dismiss = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |id: PopupId| {
            quiz_loop.dismiss(id);
        })
    };
    let apply_viewport = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |viewport: Viewport| {
            tracing::debug!(?viewport, "viewport measured");
            quiz_loop.set_viewport(viewport);
        })
    };
    let on_mounted = move |evt: MountedEvent| {
        spawn(async move {
            match evt.data().get_client_rect().await {
                Ok(rect) => apply_viewport.call(Viewport::new(rect.width(), rect.height())),
                Err(err) => {
                    tracing::debug!(?err, "viewport not measurable, keeping window size");
                }
            }
        });
    };
    // Later spawns must land inside the window as it is now.
    let on_resize = move |evt: ResizeEvent| match evt.data().get_border_box_size() {
        Ok(size) => apply_viewport.call(Viewport::new(size.width, size.height)),
        Err(err) => tracing::debug!(?err, "resize without a border box"),
    };

    let current = snapshot.read();
    let screen = QuizScreen::from_snapshot(&current, ctx.strings(current.language));
    let popups = map_popups(&current.popups, ctx.popup_size());

    rsx! {
        div {
            class: "quiz-stage",
            tabindex: "0",
            onmousemove: move |_| on_activity.call(ActivityKind::PointerMove),
            onkeydown: move |_| on_activity.call(ActivityKind::KeyPress),
            onclick: move |_| on_activity.call(ActivityKind::Click),
            onmounted: on_mounted,
            onresize: on_resize,
            main { class: "quiz-stage__content",
                QuizPanel { screen, on_intent: dispatch_intent }
            }
            PopupLayer { popups, on_dismiss }
        }
    }
}
