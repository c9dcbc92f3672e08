//! Route paths and notification defaults.
//!
//! DESIGN
//! ======
//! `App` provides one `GatehouseConfig` through context. Components read it
//! with `use_config()`, which falls back to `Default` so guards and toasts still
//! behave sensibly when mounted outside the host app (tests, embedding).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Redirect targets used by the route guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePaths {
    /// Where anonymous users are sent; receives the `next` query parameter.
    pub login: String,
    /// Where authenticated users without the required role are sent.
    pub home: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self { login: DEFAULT_LOGIN_PATH.to_owned(), home: DEFAULT_HOME_PATH.to_owned() }
    }
}

/// Notification provider tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Auto-dismiss delay applied by the shorthand helpers. `0` disables it.
    pub default_duration_ms: u64,
    /// Upper bound on simultaneously listed entries; oldest are dropped first.
    pub max_visible: Option<usize>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS, max_visible: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GatehouseConfig {
    pub routes: RoutePaths,
    pub notifications: NotificationConfig,
}

/// Returns the provided config or the defaults when none is in scope.
pub fn use_config() -> GatehouseConfig {
    use_context::<GatehouseConfig>().unwrap_or_default()
}
