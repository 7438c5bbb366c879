//! Independently cancellable recurring timers.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// A callback run every `period` on a tokio runtime.
///
/// The first run happens one full period after spawning. Dropping the task
/// cancels it, so a timer cannot outlive its owner.
#[derive(Debug)]
pub struct RecurringTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl RecurringTask {
    /// Spawn `tick` on `runtime`; returning `ControlFlow::Break` stops it.
    pub fn spawn<F>(runtime: &Handle, name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let handle = runtime.spawn(run_every(period, move || {
            tracing::trace!(task = name, "tick");
            tick()
        }));
        tracing::debug!(task = name, ?period, "recurring task started");
        Self { name, handle }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RecurringTask {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(task = self.name, "recurring task cancelled");
    }
}

fn run_every<F>(period: Duration, mut tick: F) -> impl Future<Output = ()> + Send + 'static
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tick().is_break() {
                break;
            }
        }
    }
}
