use std::sync::Arc;
use std::time::Duration;

use quiz_core::catalog;
use quiz_core::config::ChaosConfigDraft;
use quiz_core::model::{Language, PopupId, ScoreClass, SessionState, Viewport};
use quiz_core::time::fixed_clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{ActivityKind, QuizError, QuizLoopService};
use tokio::runtime::Handle;

fn service(draft: ChaosConfigDraft) -> QuizLoopService {
    let config = draft.validate().unwrap();
    let content = Arc::new(catalog::bundled().unwrap());
    QuizLoopService::with_rng(
        config,
        content,
        fixed_clock(),
        Handle::current(),
        Viewport::new(1280.0, 720.0),
        StdRng::seed_from_u64(42),
    )
}

fn always_spawn() -> ChaosConfigDraft {
    ChaosConfigDraft {
        spawn_probability: Some(1.0),
        ..ChaosConfigDraft::new()
    }
}

/// Answer the remaining questions, `correct` of them correctly.
fn answer_all(service: &QuizLoopService, mut correct: usize) {
    while let Some(question) = service.snapshot().question {
        let option = if correct > 0 {
            correct -= 1;
            question.correct()
        } else {
            (question.correct() + 1) % question.options().len()
        };
        service.answer(option).unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn perfect_run_in_secondary_language() {
    let service = service(ChaosConfigDraft::new());
    assert_eq!(service.snapshot().language, Language::German);

    service.start().unwrap();
    answer_all(&service, 10);

    let snapshot = service.snapshot();
    assert_eq!(snapshot.state, SessionState::Finished);
    assert_eq!(snapshot.score, 10);
    assert_eq!(snapshot.classification, Some(ScoreClass::Perfect));
}

#[tokio::test(start_paused = true)]
async fn four_correct_is_encouragement() {
    let service = service(ChaosConfigDraft::new());
    service.start().unwrap();
    answer_all(&service, 4);

    let snapshot = service.snapshot();
    assert_eq!(snapshot.score, 4);
    assert_eq!(snapshot.classification, Some(ScoreClass::Encouragement));
}

#[tokio::test(start_paused = true)]
async fn five_correct_is_good() {
    let service = service(ChaosConfigDraft::new());
    service.start().unwrap();
    answer_all(&service, 5);

    let snapshot = service.snapshot();
    assert_eq!(snapshot.score, 5);
    assert_eq!(snapshot.classification, Some(ScoreClass::Good));
}

#[tokio::test(start_paused = true)]
async fn inactivity_resets_session_and_clears_popups() {
    let service = service(ChaosConfigDraft::new());
    service.start().unwrap();

    tokio::time::sleep(Duration::from_millis(10_500)).await;
    let snapshot = service.snapshot();
    assert_eq!(snapshot.state, SessionState::Running);
    assert!(!snapshot.popups.is_empty());

    tokio::time::sleep(Duration::from_secs(15)).await;
    let snapshot = service.snapshot();
    assert_eq!(snapshot.state, SessionState::Idle);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.question_index, 0);
    assert!(snapshot.popups.is_empty());
    assert!(!service.timers_active());
    assert_eq!(service.listener_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn countdown_follows_the_watchdog() {
    // No popups, so only the once-per-second watchdog publishes.
    let service = service(ChaosConfigDraft {
        spawn_probability: Some(0.0),
        ..ChaosConfigDraft::new()
    });
    service.start().unwrap();
    assert_eq!(service.snapshot().remaining_secs, 20);

    tokio::time::sleep(Duration::from_millis(10_500)).await;
    assert_eq!(service.snapshot().remaining_secs, 10);

    tokio::time::sleep(Duration::from_secs(9)).await;
    let snapshot = service.snapshot();
    assert_eq!(snapshot.state, SessionState::Running);
    assert_eq!(snapshot.remaining_secs, 1);
    assert!(snapshot.popups.is_empty());
}

#[tokio::test(start_paused = true)]
async fn activity_postpones_the_reset() {
    let service = service(ChaosConfigDraft::new());
    service.start().unwrap();

    tokio::time::sleep(Duration::from_secs(15)).await;
    assert!(service.signal_activity(ActivityKind::PointerMove));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(service.snapshot().state, SessionState::Running);

    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(service.snapshot().state, SessionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn answering_counts_as_activity() {
    let service = service(ChaosConfigDraft::new());
    service.start().unwrap();

    tokio::time::sleep(Duration::from_secs(19)).await;
    service.answer(0).unwrap();
    tokio::time::sleep(Duration::from_secs(19)).await;

    let snapshot = service.snapshot();
    assert_eq!(snapshot.state, SessionState::Running);
    assert_eq!(snapshot.question_index, 1);
}

#[tokio::test(start_paused = true)]
async fn popup_count_caps_at_newest_eight() {
    let service = service(always_spawn());
    service.start().unwrap();

    // 20 spawn ticks at 800 ms, still inside the inactivity window.
    tokio::time::sleep(Duration::from_millis(20 * 800 + 100)).await;

    let ids: Vec<PopupId> = service.snapshot().popups.iter().map(|p| p.id()).collect();
    let expected: Vec<PopupId> = (13..=20).map(PopupId::new).collect();
    assert_eq!(ids, expected);
}

#[tokio::test(start_paused = true)]
async fn popups_stay_within_viewport() {
    let service = service(always_spawn());
    service.set_viewport(Viewport::new(640.0, 480.0));
    service.start().unwrap();
    tokio::time::sleep(Duration::from_secs(8)).await;

    for popup in service.snapshot().popups {
        assert!(popup.x() >= 0.0 && popup.x() < 440.0, "x = {}", popup.x());
        assert!(popup.y() >= 0.0 && popup.y() < 280.0, "y = {}", popup.y());
    }
}

#[tokio::test(start_paused = true)]
async fn resized_viewport_bounds_later_popups() {
    let service = service(always_spawn());
    service.start().unwrap();
    tokio::time::sleep(Duration::from_millis(3 * 800 + 100)).await;
    let before = service.snapshot().popups;
    assert_eq!(before.len(), 3);
    let last_before = before.iter().map(|p| p.id()).max().unwrap();

    service.set_viewport(Viewport::new(300.0, 250.0));
    assert_eq!(service.viewport(), Viewport::new(300.0, 250.0));
    tokio::time::sleep(Duration::from_millis(5 * 800)).await;

    let after: Vec<_> = service
        .snapshot()
        .popups
        .into_iter()
        .filter(|p| p.id() > last_before)
        .collect();
    assert_eq!(after.len(), 5);
    for popup in after {
        assert!(popup.x() >= 0.0 && popup.x() < 100.0, "x = {}", popup.x());
        assert!(popup.y() >= 0.0 && popup.y() < 50.0, "y = {}", popup.y());
    }
}

#[tokio::test(start_paused = true)]
async fn dismiss_removes_a_single_popup() {
    let service = service(always_spawn());
    service.start().unwrap();
    tokio::time::sleep(Duration::from_millis(3 * 800 + 100)).await;

    let popups = service.snapshot().popups;
    assert_eq!(popups.len(), 3);
    let target = popups[1].id();
    assert!(service.dismiss(target));
    assert!(!service.dismiss(target));

    let remaining: Vec<PopupId> = service.snapshot().popups.iter().map(|p| p.id()).collect();
    assert_eq!(remaining, [popups[0].id(), popups[2].id()]);
}

#[tokio::test(start_paused = true)]
async fn finishing_stops_timers_and_listeners() {
    let service = service(always_spawn());
    service.start().unwrap();
    assert!(service.timers_active());
    assert_eq!(service.listener_count(), 1);

    tokio::time::sleep(Duration::from_secs(2)).await;
    answer_all(&service, 7);

    assert!(!service.timers_active());
    assert_eq!(service.listener_count(), 0);
    assert!(!service.signal_activity(ActivityKind::KeyPress));

    tokio::time::sleep(Duration::from_secs(60)).await;
    let snapshot = service.snapshot();
    assert_eq!(snapshot.state, SessionState::Finished);
    assert!(snapshot.popups.is_empty());
    assert_eq!(service.answer(0), Err(QuizError::NotRunning));
}

#[tokio::test(start_paused = true)]
async fn restart_returns_to_idle_and_unlocks_language() {
    let service = service(ChaosConfigDraft::new());
    service.start().unwrap();
    assert_eq!(service.toggle_language(), Err(QuizError::LanguageLocked));
    answer_all(&service, 3);

    service.restart();
    let snapshot = service.snapshot();
    assert_eq!(snapshot.state, SessionState::Idle);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.question_index, 0);
    assert_eq!(snapshot.classification, None);

    assert_eq!(service.toggle_language(), Ok(Language::English));
    assert_eq!(service.snapshot().language, Language::English);
}

#[tokio::test(start_paused = true)]
async fn repeated_sessions_do_not_leak_timers() {
    let service = service(always_spawn());
    for _ in 0..3 {
        service.start().unwrap();
        service.restart();
    }
    assert_eq!(service.listener_count(), 0);

    service.start().unwrap();
    assert_eq!(service.listener_count(), 1);
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_eq!(service.snapshot().popups.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn misuse_is_ignored() {
    let service = service(ChaosConfigDraft::new());
    let before = service.snapshot();

    assert_eq!(service.answer(1), Err(QuizError::NotRunning));
    assert!(!service.signal_activity(ActivityKind::Click));
    assert!(!service.dismiss(PopupId::new(99)));
    assert_eq!(service.snapshot(), before);

    service.start().unwrap();
    assert_eq!(service.start(), Err(QuizError::AlreadyStarted));
    assert_eq!(service.snapshot().state, SessionState::Running);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_changes() {
    let service = service(ChaosConfigDraft::new());
    let mut updates = service.subscribe();

    service.start().unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().state, SessionState::Running);

    service.restart();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().state, SessionState::Idle);
}
