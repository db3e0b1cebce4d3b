//! Once-per-period tick source for the game clock.

use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval_at};
use tracing::debug;

/// Delivers ticks while armed.
///
/// Disarming does not drop the interval; the event loop just stops polling
/// it. Re-arming restarts the period so the first second of a new game is a
/// full second.
#[derive(Debug)]
pub struct GameTimer {
    interval: Interval,
    period: Duration,
    armed: bool,
}

impl GameTimer {
    /// Creates an armed timer whose first tick is one `period` away.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            period,
            armed: true,
        }
    }

    /// Whether ticks should be delivered.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Stops delivering ticks.
    pub fn stop(&mut self) {
        debug!("Timer stopped");
        self.armed = false;
    }

    /// Starts counting again from a full period.
    pub fn restart(&mut self) {
        debug!(period_ms = self.period.as_millis() as u64, "Timer restarted");
        self.interval.reset();
        self.armed = true;
    }

    /// Waits for the next tick.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
