//! Deferred callbacks for notification auto-removal.
//!
//! DESIGN
//! ======
//! `Notifier` schedules through `RemovalScheduler` instead of touching the
//! browser directly. The hydrate build sleeps on `gloo-timers`; the SSR build
//! renders a single frame, so nothing would observe a removal and scheduling
//! drops the task. Tests install a hand-stepped implementation.

use std::sync::Arc;
use std::time::Duration;

/// Work run once the delay elapsed.
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

pub trait RemovalScheduler: Send + Sync {
    /// Run `task` no earlier than `delay` from now.
    fn schedule(&self, delay: Duration, task: TimerTask);
}

/// `setTimeout`-backed scheduler used in the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

#[cfg(feature = "hydrate")]
impl RemovalScheduler for BrowserTimers {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            task();
        });
    }
}

/// Server-render scheduler; the page is never observed after the first frame.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerTimers;

#[cfg(not(feature = "hydrate"))]
impl RemovalScheduler for ServerTimers {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        log::debug!("skipping {}ms removal timer during server render", delay.as_millis());
        drop(task);
    }
}

/// Scheduler matching the current build target.
pub fn default_scheduler() -> Arc<dyn RemovalScheduler> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserTimers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(ServerTimers)
    }
}
