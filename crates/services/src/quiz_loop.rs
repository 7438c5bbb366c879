//! Orchestrates one quiz session with its popups, timers and activity
//! tracking, and publishes snapshots for the UI.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use quiz_core::Clock;
use quiz_core::config::ChaosConfig;
use quiz_core::model::{
    ContentBundle, Language, Popup, PopupId, Question, ScoreClass, SessionEvent, SessionState,
    Viewport,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::activity::{ActivityHub, ActivityKind, ActivitySubscription};
use crate::clock::SessionClock;
use crate::error::QuizError;
use crate::popups::PopupSpawner;
use crate::quiz::{AnswerOutcome, QuizEngine};
use crate::schedule::RecurringTask;

/// Everything the UI needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot {
    pub state: SessionState,
    pub language: Language,
    pub question_index: usize,
    pub question_count: usize,
    pub score: u32,
    /// The question on screen while running.
    pub question: Option<Question>,
    /// Whole seconds until the inactivity reset; zero unless running.
    pub remaining_secs: u64,
    /// Configured inactivity threshold.
    pub inactivity_timeout_ms: u64,
    /// Set once the session is finished.
    pub classification: Option<ScoreClass>,
    /// Live popups, oldest first.
    pub popups: Vec<Popup>,
}

/// Resources that exist only while a session is running.
///
/// Dropping it cancels both timers and removes the activity listener.
struct ActiveSession {
    _spawn: RecurringTask,
    _watchdog: RecurringTask,
    _activity: ActivitySubscription,
}

struct LoopState {
    engine: QuizEngine,
    spawner: PopupSpawner<StdRng>,
    viewport: Viewport,
    /// Bumped on every start; timers from older sessions stop on mismatch.
    generation: u64,
    active: Option<ActiveSession>,
}

struct Inner {
    state: Mutex<LoopState>,
    hub: ActivityHub,
    clock: SessionClock,
    config: ChaosConfig,
    runtime: Handle,
    snapshots: watch::Sender<QuizSnapshot>,
}

/// Session authority wiring the quiz engine to the popup spawner.
///
/// The popup spawner follows the engine's start/end events. All mutations
/// happen under one lock and end with a snapshot publish.
#[derive(Clone)]
pub struct QuizLoopService {
    inner: Arc<Inner>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        config: ChaosConfig,
        content: Arc<ContentBundle>,
        clock: Clock,
        runtime: Handle,
        viewport: Viewport,
    ) -> Self {
        Self::with_rng(config, content, clock, runtime, viewport, StdRng::from_os_rng())
    }

    /// Like `new`, with an explicit random source for reproducible popups.
    #[must_use]
    pub fn with_rng(
        config: ChaosConfig,
        content: Arc<ContentBundle>,
        clock: Clock,
        runtime: Handle,
        viewport: Viewport,
        rng: StdRng,
    ) -> Self {
        let clock = SessionClock::new(clock);
        let state = LoopState {
            engine: QuizEngine::new(content, config.quiz, clock.now()),
            spawner: PopupSpawner::new(config.spawn, rng),
            viewport,
            generation: 0,
            active: None,
        };
        let initial = snapshot_of(&state, &clock);
        let (snapshots, _) = watch::channel(initial);

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                hub: ActivityHub::new(),
                clock,
                config,
                runtime,
                snapshots,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChaosConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.inner.snapshots.borrow().clone()
    }

    /// Receiver notified after every visible change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// # Errors
    ///
    /// Returns `QuizError::AlreadyStarted` unless the quiz is idle.
    pub fn start(&self) -> Result<(), QuizError> {
        let mut state = self.inner.lock();
        let now = self.inner.clock.now();
        let event = state
            .engine
            .start(now)
            .inspect_err(|err| tracing::debug!(%err, "start ignored"))?;
        tracing::info!(language = %state.engine.language(), "quiz session started");
        self.inner.apply(&mut state, event);
        self.inner.publish(&state);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizError` when no session is running or the option does not
    /// exist; nothing changes in that case.
    pub fn answer(&self, option: usize) -> Result<AnswerOutcome, QuizError> {
        let mut state = self.inner.lock();
        let now = self.inner.clock.now();
        let outcome = state
            .engine
            .answer(option, now)
            .inspect_err(|err| tracing::debug!(%err, option, "answer ignored"))?;
        if let Some(event) = outcome.event {
            tracing::info!(score = state.engine.score(), "quiz session finished");
            self.inner.apply(&mut state, event);
        }
        self.inner.publish(&state);
        Ok(outcome)
    }

    pub fn restart(&self) {
        let mut state = self.inner.lock();
        let now = self.inner.clock.now();
        let event = state.engine.restart(now);
        tracing::info!("quiz session reset");
        self.inner.apply(&mut state, event);
        self.inner.publish(&state);
    }

    /// # Errors
    ///
    /// Returns `QuizError::LanguageLocked` once a session has started.
    pub fn toggle_language(&self) -> Result<Language, QuizError> {
        let mut state = self.inner.lock();
        let language = state
            .engine
            .toggle_language()
            .inspect_err(|err| tracing::debug!(%err, "language toggle ignored"))?;
        self.inner.publish(&state);
        Ok(language)
    }

    /// Remove a popup; false if it was already gone.
    pub fn dismiss(&self, id: PopupId) -> bool {
        let mut state = self.inner.lock();
        let removed = state.spawner.dismiss(id);
        if removed {
            self.inner.publish(&state);
        }
        removed
    }

    /// Forward a raw activity signal. Returns false when nobody listens,
    /// i.e. outside a running session.
    pub fn signal_activity(&self, kind: ActivityKind) -> bool {
        self.inner.hub.emit(kind) > 0
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.inner.lock().viewport = viewport;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.inner.lock().viewport
    }

    /// True while the spawn and inactivity timers exist.
    #[must_use]
    pub fn timers_active(&self) -> bool {
        self.inner.lock().active.is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.hub.listener_count()
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, LoopState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &LoopState) {
        let next = snapshot_of(state, &self.clock);
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    fn apply(self: &Arc<Self>, state: &mut LoopState, event: SessionEvent) {
        match event {
            SessionEvent::Started => {
                state.generation += 1;
                state.spawner.on_session_started();
                state.active = Some(self.activate(state.generation));
            }
            SessionEvent::Ended => {
                state.spawner.on_session_ended();
                state.active = None;
            }
        }
    }

    fn activate(self: &Arc<Self>, generation: u64) -> ActiveSession {
        let spawn = {
            let inner = Arc::downgrade(self);
            RecurringTask::spawn(
                &self.runtime,
                "popup-spawn",
                self.config.spawn.spawn_period(),
                move || spawn_tick(&inner, generation),
            )
        };
        let watchdog = {
            let inner = Arc::downgrade(self);
            RecurringTask::spawn(
                &self.runtime,
                "inactivity-watchdog",
                self.config.quiz.inactivity_check_period(),
                move || watchdog_tick(&inner, generation),
            )
        };
        let activity = {
            let inner = Arc::downgrade(self);
            self.hub.subscribe(move |kind| record_activity(&inner, generation, kind))
        };

        ActiveSession {
            _spawn: spawn,
            _watchdog: watchdog,
            _activity: activity,
        }
    }
}

fn spawn_tick(inner: &Weak<Inner>, generation: u64) -> ControlFlow<()> {
    let Some(inner) = inner.upgrade() else {
        return ControlFlow::Break(());
    };
    let mut state = inner.lock();
    if state.generation != generation || state.active.is_none() {
        return ControlFlow::Break(());
    }
    let viewport = state.viewport;
    if state.spawner.tick(viewport).is_some() {
        inner.publish(&state);
    }
    ControlFlow::Continue(())
}

fn watchdog_tick(inner: &Weak<Inner>, generation: u64) -> ControlFlow<()> {
    let Some(inner) = inner.upgrade() else {
        return ControlFlow::Break(());
    };
    let mut state = inner.lock();
    if state.generation != generation || !state.engine.is_running() {
        return ControlFlow::Break(());
    }
    let now = inner.clock.now();
    if let Some(event) = state.engine.check_inactivity(now) {
        tracing::info!("quiz session reset after inactivity");
        inner.apply(&mut state, event);
        inner.publish(&state);
        return ControlFlow::Break(());
    }
    // Keeps the countdown on screen current.
    inner.publish(&state);
    ControlFlow::Continue(())
}

fn record_activity(inner: &Weak<Inner>, generation: u64, kind: ActivityKind) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut state = inner.lock();
    if state.generation != generation {
        return;
    }
    let now = inner.clock.now();
    if state.engine.record_activity(now) {
        tracing::trace!(?kind, "activity");
        inner.publish(&state);
    }
}

fn snapshot_of(state: &LoopState, clock: &SessionClock) -> QuizSnapshot {
    let engine = &state.engine;
    let remaining_secs = if engine.is_running() {
        engine.remaining_secs(clock.now())
    } else {
        0
    };
    QuizSnapshot {
        state: engine.state(),
        language: engine.language(),
        question_index: engine.current_index(),
        question_count: engine.question_count(),
        score: engine.score(),
        question: engine.current_question().cloned(),
        remaining_secs,
        inactivity_timeout_ms: engine.settings().inactivity_timeout_ms(),
        classification: engine.classification(),
        popups: state.spawner.popups().cloned().collect(),
    }
}
