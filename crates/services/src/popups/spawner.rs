use std::collections::VecDeque;

use quiz_core::config::SpawnSettings;
use quiz_core::model::{Popup, PopupId, PopupIdGenerator, Viewport};
use rand::Rng;
use rand::rngs::StdRng;

/// Creates, caps and removes the decorative popups shown during a session.
///
/// The spawner only holds state; the periodic tick is driven by the owner
/// (see `QuizLoopService`). Popups are kept in creation order, oldest first.
#[derive(Debug)]
pub struct PopupSpawner<R = StdRng> {
    settings: SpawnSettings,
    rng: R,
    ids: PopupIdGenerator,
    popups: VecDeque<Popup>,
    active: bool,
}

impl<R: Rng> PopupSpawner<R> {
    #[must_use]
    pub fn new(settings: SpawnSettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            ids: PopupIdGenerator::new(),
            popups: VecDeque::with_capacity(settings.max_popups() + 1),
            active: false,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SpawnSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Live popups, oldest first.
    pub fn popups(&self) -> impl Iterator<Item = &Popup> {
        self.popups.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.popups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }

    pub fn on_session_started(&mut self) {
        self.active = true;
    }

    /// Stop spawning and clear every live popup.
    pub fn on_session_ended(&mut self) {
        self.active = false;
        self.popups.clear();
    }

    /// One spawn tick: with the configured probability, create a popup.
    ///
    /// Skipped ticks are normal pacing. Inactive spawners never create popups.
    pub fn tick(&mut self, viewport: Viewport) -> Option<PopupId> {
        if !self.active {
            return None;
        }
        if !self.rng.random_bool(self.settings.spawn_probability()) {
            return None;
        }
        Some(self.spawn(viewport))
    }

    /// Place a popup at a random on-screen position and evict the oldest
    /// popups above the cap.
    fn spawn(&mut self, viewport: Viewport) -> PopupId {
        let (max_x, max_y) = viewport.placement_bounds(self.settings.popup_size());
        let x = self.rng.random::<f64>() * max_x;
        let y = self.rng.random::<f64>() * max_y;
        let floating = self
            .rng
            .random_bool(self.settings.floating_probability());

        let id = self.ids.next_id();
        self.popups.push_back(Popup::new(id, x, y, floating));

        let mut evicted = 0_usize;
        while self.popups.len() > self.settings.max_popups() {
            self.popups.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            tracing::debug!(%id, evicted, "popup cap reached, evicted oldest");
        }
        id
    }

    /// Remove the popup with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: PopupId) -> bool {
        let before = self.popups.len();
        self.popups.retain(|popup| popup.id() != id);
        before != self.popups.len()
    }
}
