use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::catalog;
use quiz_core::config::ChaosConfigDraft;
use quiz_core::model::{ContentBundle, Viewport};
use quiz_core::time::fixed_clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::QuizLoopService;
use tokio::runtime::Handle;

use crate::app::QuizStage;
use crate::context::{UiApp, build_app_context};

#[derive(Clone)]
struct TestApp {
    quiz_loop: QuizLoopService,
    content: Arc<ContentBundle>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> QuizLoopService {
        self.quiz_loop.clone()
    }

    fn content(&self) -> Arc<ContentBundle> {
        Arc::clone(&self.content)
    }
}

#[derive(Props, Clone)]
struct StageHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for StageHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StageHarnessProps {}

#[component]
fn StageHarness(props: StageHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizStage {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_loop: QuizLoopService,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Must run inside a tokio runtime; the service schedules its timers there.
pub fn setup_view_harness(draft: ChaosConfigDraft) -> ViewHarness {
    let config = draft.validate().expect("valid test config");
    let content = Arc::new(catalog::bundled().expect("bundled content"));
    let quiz_loop = QuizLoopService::with_rng(
        config,
        Arc::clone(&content),
        fixed_clock(),
        Handle::current(),
        Viewport::new(1024.0, 768.0),
        StdRng::seed_from_u64(11),
    );

    let app = Arc::new(TestApp {
        quiz_loop: quiz_loop.clone(),
        content,
    });
    let dom = VirtualDom::new_with_props(StageHarness, StageHarnessProps { app });

    ViewHarness { dom, quiz_loop }
}

/// Answer every remaining question, the first `correct` ones correctly.
pub fn answer_all(quiz_loop: &QuizLoopService, mut correct: usize) {
    while let Some(question) = quiz_loop.snapshot().question {
        let option = if correct > 0 {
            correct -= 1;
            question.correct()
        } else {
            (question.correct() + 1) % question.options().len()
        };
        quiz_loop.answer(option).expect("answer while running");
    }
}
