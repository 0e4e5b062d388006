//! User-facing notifications raised by the error interceptor.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
}

/// A toast-style message for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub dismissible: bool,
}

impl Notification {
    /// A dismissible error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            dismissible: true,
        }
    }
}

/// Sink that presents notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Notifier for headless callers: emits each notification as a `tracing`
/// error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::error!(
            target: "mediahub_client::notify",
            dismissible = notification.dismissible,
            "{}",
            notification.message
        );
    }
}
