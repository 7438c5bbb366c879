use chrono::{DateTime, TimeDelta, Utc};
use quiz_core::Clock;
use tokio::time::Instant;

/// Wall-clock timestamps that advance on monotonic time.
///
/// Anchored once on the injected `Clock`; afterwards `now()` moves with the
/// tokio clock, so inactivity is immune to wall-clock jumps and follows
/// virtual time when tokio's clock is paused.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    anchor_wall: DateTime<Utc>,
    anchor: Instant,
}

impl SessionClock {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            anchor_wall: clock.now(),
            anchor: Instant::now(),
        }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        let elapsed = TimeDelta::from_std(self.anchor.elapsed()).unwrap_or(TimeDelta::zero());
        self.anchor_wall + elapsed
    }
}
