//! Browser timers via `gloo-timers`

use gloo_timers::callback::Timeout;

use crate::surface::{Scheduler, TimerHandle};

pub struct GlooScheduler;

/// Pending `setTimeout`. Dropping it clears the timeout.
pub struct GlooTimer(Timeout);

impl Scheduler for GlooScheduler {
    type Handle = GlooTimer;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> GlooTimer {
        GlooTimer(Timeout::new(delay_ms, callback))
    }
}

impl TimerHandle for GlooTimer {
    fn cancel(self) {
        let _ = self.0.cancel();
    }

    fn detach(self) {
        let _ = self.0.forget();
    }
}
