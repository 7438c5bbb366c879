use std::time::Duration;

use quiz_core::config::ChaosConfigDraft;

use super::test_harness::{answer_all, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn start_screen_renders_in_german_by_default() {
    let mut harness = setup_view_harness(ChaosConfigDraft::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Chaos-Quiz-Challenge"), "missing title in {html}");
    assert!(html.contains("DE"), "missing language badge in {html}");
    assert!(html.contains("Quiz starten"), "missing start button in {html}");
    assert!(!html.contains("popup-card"), "unexpected popup in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_warns_with_configured_timeout() {
    let mut harness = setup_view_harness(ChaosConfigDraft {
        inactivity_timeout_ms: Some(45_000),
        ..ChaosConfigDraft::new()
    });
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Das Quiz wird nach 45 Sekunden Inaktivität neu gestartet!"),
        "missing warning in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn language_toggle_switches_start_screen() {
    let mut harness = setup_view_harness(ChaosConfigDraft::new());
    harness.quiz_loop.toggle_language().expect("idle toggle");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Chaos Quiz Challenge"), "missing title in {html}");
    assert!(html.contains("EN"), "missing language badge in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_shows_progress_score_and_countdown() {
    let mut harness = setup_view_harness(ChaosConfigDraft::new());
    harness.quiz_loop.start().expect("start");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Frage 1/10"), "missing progress in {html}");
    assert!(html.contains("Punkte: 0"), "missing score in {html}");
    assert!(html.contains("Zeit bis zum Neustart: 0:20"), "missing countdown in {html}");
    assert!(html.contains("Wie viele Tage hat ein Schaltjahr?"), "missing prompt in {html}");
    assert_eq!(html.matches("class=\"quiz-option\"").count(), 3, "expected three options in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn score_screen_shows_result_and_message() {
    let mut harness = setup_view_harness(ChaosConfigDraft::new());
    harness.quiz_loop.start().expect("start");
    answer_all(&harness.quiz_loop, 10);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Dein Ergebnis: 10 von 10"), "missing headline in {html}");
    assert!(html.contains("Perfekte Punktzahl!"), "missing message in {html}");
    assert!(html.contains("Erneut versuchen"), "missing try again in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stage_follows_published_snapshots() {
    let mut harness = setup_view_harness(ChaosConfigDraft::new());
    harness.rebuild();
    assert!(harness.render().contains("Quiz starten"));

    harness.quiz_loop.start().expect("start");
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Frage 1/10"), "missing question after start in {html}");
}

#[tokio::test(start_paused = true)]
async fn popups_render_while_running() {
    let draft = ChaosConfigDraft {
        spawn_probability: Some(1.0),
        ..ChaosConfigDraft::new()
    };
    let mut harness = setup_view_harness(draft);
    harness.quiz_loop.start().expect("start");
    tokio::time::sleep(Duration::from_millis(3 * 800 + 100)).await;

    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("popup-card__close").count(), 3, "expected three popups in {html}");
    assert!(html.contains("width: 200px"), "missing popup size in {html}");
}
