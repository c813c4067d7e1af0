// src/view/ticker.rs
//! Periodic countdown refresh for an active job view

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::trace;

use super::model::ViewModel;
use crate::countdown::Clock;

/// Recompute the countdown once against `clock`, emitting only on change.
pub(crate) fn tick_once(state: &watch::Sender<ViewModel>, clock: &dyn Clock) -> bool {
    let now = clock.now();
    state.send_if_modified(|vm| vm.tick(now))
}

/// Spawn the refresh loop. The loop only stops when the returned handle is
/// aborted.
pub(crate) fn spawn_ticker(
    period: Duration,
    clock: Arc<dyn Clock>,
    state: Arc<watch::Sender<ViewModel>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tick_once(&state, clock.as_ref()) {
                let left = state.borrow().time_left;
                if let Some(left) = left {
                    trace!("Countdown: {}", left);
                }
            }
        }
    })
}
