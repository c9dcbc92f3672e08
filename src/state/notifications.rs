//! Toast notification list and the context handle used to drive it.
//!
//! DESIGN
//! ======
//! `NotificationStack` is a plain ordered list with no reactive or timer
//! dependencies so insertion and dismissal are testable natively. `Notifier`
//! wraps it in a `RwSignal` shared through context and hands one removal task
//! per auto-expiring entry to a `RemovalScheduler`.
//!
//! LIFECYCLE
//! =========
//! The scheduled task removes its entry by id once the delay elapsed. Removing
//! an id that is already gone is a no-op, and tasks that outlive the provider
//! hit a disposed signal and do nothing.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use crate::config::NotificationConfig;
use crate::util::clock;
use crate::util::timer::{RemovalScheduler, default_scheduler};

/// Entry identifier: the creation timestamp in epoch milliseconds, bumped
/// forward when two entries land in the same millisecond.
pub type NotificationId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Ordered list of visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationStack {
    entries: Vec<Notification>,
    last_id: NotificationId,
    max_visible: Option<usize>,
}

impl NotificationStack {
    pub fn new(max_visible: Option<usize>) -> Self {
        Self { entries: Vec::new(), last_id: 0, max_visible }
    }

    /// Append an entry created at `now_ms`.
    pub fn push(&mut self, now_ms: u64, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;

        self.entries.push(Notification { id, message: message.into(), severity });

        if let Some(max) = self.max_visible {
            let overflow = self.entries.len().saturating_sub(max);
            if overflow > 0 {
                self.entries.drain(..overflow);
            }
        }
        id
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    #[error("notifications must be used within a NotificationProvider")]
    OutsideProvider,
}

/// Context handle for adding and dismissing notifications.
#[derive(Clone, Copy)]
pub struct Notifier {
    stack: RwSignal<NotificationStack>,
    scheduler: StoredValue<Arc<dyn RemovalScheduler>>,
    default_duration: Duration,
}

impl Notifier {
    fn new(config: NotificationConfig, scheduler: Arc<dyn RemovalScheduler>) -> Self {
        Self {
            stack: RwSignal::new(NotificationStack::new(config.max_visible)),
            scheduler: StoredValue::new(scheduler),
            default_duration: Duration::from_millis(config.default_duration_ms),
        }
    }

    /// Show `message` and schedule its removal after `duration`.
    /// `Duration::ZERO` keeps it until dismissed.
    ///
    /// Returns `None` once the owning provider has been disposed.
    pub fn add(&self, message: impl Into<String>, severity: Severity, duration: Duration) -> Option<NotificationId> {
        let now = clock::now_ms();
        let id = self.stack.try_update(|s| s.push(now, message, severity))?;
        log::debug!("notification {id} added ({})", severity.as_str());

        if !duration.is_zero() {
            let notifier = *self;
            let task = Box::new(move || notifier.remove(id));
            if self.scheduler.try_with_value(|timers| timers.schedule(duration, task)).is_none() {
                log::warn!("notification {id} added without a removal timer");
            }
        }
        Some(id)
    }

    /// `Info` notification with the configured default duration.
    pub fn add_default(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.add(message, Severity::Info, self.default_duration)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.add(message, Severity::Info, self.default_duration)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.add(message, Severity::Success, self.default_duration)
    }

    pub fn warning(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.add(message, Severity::Warning, self.default_duration)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.add(message, Severity::Error, self.default_duration)
    }

    /// Dismiss exactly the entry with `id`.
    pub fn remove(&self, id: NotificationId) {
        if self.stack.try_update(|s| s.remove(id)) == Some(true) {
            log::debug!("notification {id} removed");
        }
    }

    /// Tracked snapshot of the visible entries.
    pub fn entries(&self) -> Vec<Notification> {
        self.stack.with(|s| s.entries().to_vec())
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.stack.with_untracked(|s| s.contains(id))
    }

    pub fn is_empty(&self) -> bool {
        self.stack.with(NotificationStack::is_empty)
    }
}

/// Create a notifier using the build target's timers and provide it to
/// descendants.
pub fn provide_notifications(config: NotificationConfig) -> Notifier {
    provide_notifications_with(config, default_scheduler())
}

/// Like [`provide_notifications`], with an explicit removal scheduler.
pub fn provide_notifications_with(config: NotificationConfig, scheduler: Arc<dyn RemovalScheduler>) -> Notifier {
    let notifier = Notifier::new(config, scheduler);
    provide_context(notifier);
    notifier
}

/// Fetch the notifier provided by an enclosing `NotificationProvider`.
///
/// # Errors
///
/// Returns [`NotificationError::OutsideProvider`] when no provider is in scope.
pub fn use_notifications() -> Result<Notifier, NotificationError> {
    use_context::<Notifier>().ok_or(NotificationError::OutsideProvider)
}
