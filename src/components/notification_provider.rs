//! Toast notification provider and its on-screen stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mount once near the root. Descendants call `use_notifications()` to get a
//! `Notifier`; the provider renders its children followed by the stacked,
//! dismissible alerts in the bottom-right corner.

#[cfg(test)]
#[path = "notification_provider_test.rs"]
mod notification_provider_test;

use leptos::prelude::*;

use crate::config::use_config;
use crate::state::notifications::{Notification, Notifier, Severity, provide_notifications};

const STACK_CLASS: &str = "fixed bottom-0 right-0 p-6 z-50 space-y-4";
const ALERT_BASE_CLASS: &str = "px-4 py-3 rounded-lg shadow-lg transform transition-all duration-300";
const DISMISS_BUTTON_CLASS: &str = "ml-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8 \
     focus:outline-none focus:ring-2 focus:ring-offset-2";
const ICON_BASE_CLASS: &str = "h-5 w-5";

const DISMISS_ICON_PATH: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";
const SUCCESS_ICON_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";
const ERROR_ICON_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z";
const WARNING_ICON_PATH: &str = "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z";
const INFO_ICON_PATH: &str = "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z";

/// Background/text colours for an alert.
fn severity_classes(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "bg-green-50 text-green-800",
        Severity::Error => "bg-red-50 text-red-800",
        Severity::Warning => "bg-yellow-50 text-yellow-800",
        Severity::Info => "bg-blue-50 text-blue-800",
    }
}

fn alert_class(severity: Severity) -> String {
    format!("{ALERT_BASE_CLASS} {}", severity_classes(severity))
}

fn icon_class(severity: Severity) -> String {
    let colour = match severity {
        Severity::Success => "text-green-400",
        Severity::Error => "text-red-400",
        Severity::Warning => "text-yellow-400",
        Severity::Info => "text-blue-400",
    };
    format!("{ICON_BASE_CLASS} {colour}")
}

fn icon_path(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => SUCCESS_ICON_PATH,
        Severity::Error => ERROR_ICON_PATH,
        Severity::Warning => WARNING_ICON_PATH,
        Severity::Info => INFO_ICON_PATH,
    }
}

/// Provides a `Notifier` to `children` and renders the toast stack after them.
#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let notifier = provide_notifications(use_config().notifications);

    view! {
        {children()}
        <NotificationStackView notifier/>
    }
}

#[component]
fn NotificationStackView(notifier: Notifier) -> impl IntoView {
    view! {
        <Show when=move || !notifier.is_empty()>
            <div class=STACK_CLASS>
                <For
                    each=move || notifier.entries()
                    key=|entry| entry.id
                    children=move |entry: Notification| view! { <NotificationAlert entry notifier/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn NotificationAlert(entry: Notification, notifier: Notifier) -> impl IntoView {
    let Notification { id, message, severity, .. } = entry;
    view! {
        <div class=alert_class(severity) role="alert" data-severity=severity.as_str()>
            <div class="flex items-center">
                <svg class=icon_class(severity) fill="currentColor" viewBox="0 0 20 20">
                    <path fill-rule="evenodd" d=icon_path(severity) clip-rule="evenodd"></path>
                </svg>
                <p class="ml-3 text-sm font-medium">{message}</p>
                <button type="button" class=DISMISS_BUTTON_CLASS on:click=move |_| notifier.remove(id)>
                    <span class="sr-only">"Dismiss"</span>
                    <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20">
                        <path fill-rule="evenodd" d=DISMISS_ICON_PATH clip-rule="evenodd"></path>
                    </svg>
                </button>
            </div>
        </div>
    }
}
