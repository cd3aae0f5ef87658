//! Poll scheduling.
//!
//! A cancellable repeating timer that emits `UiEvent::PollDue` into the
//! runtime inbox once per period. The first trigger fires only after one
//! full period has elapsed; there is no poll on startup.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;
use crate::runtime::UiEventSender;

/// Fixed-period poll trigger.
///
/// Dropping the scheduler cancels the timer task, so teardown cannot leave a
/// timer running.
#[derive(Debug)]
pub struct PollScheduler {
    cancel: CancellationToken,
}

impl PollScheduler {
    /// Spawns the timer task on the current tokio runtime.
    ///
    /// Triggers fire on cadence regardless of whether earlier polls are
    /// still in flight; overlap is resolved by the reducer, not here. If the
    /// loop stalls past a whole period, the missed trigger is delayed rather
    /// than burst.
    pub fn start(period: Duration, inbox: UiEventSender) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            let mut ticks = time::interval_at(time::Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    _ = ticks.tick() => {
                        if inbox.send(UiEvent::PollDue).is_err() {
                            // viewer is gone
                            break;
                        }
                    }
                }
            }
        });

        Self { cancel }
    }

    /// Stops the timer. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
