//! Interceptor traits and the standard error-notification interceptor.
//!
//! # Design
//! Request interceptors may rewrite the outgoing request or abort it with an
//! error. Response interceptors see successes by value (and may replace
//! them) but see failures only by reference: the client always hands the
//! original error back to the caller, so no interceptor can swallow or wrap
//! one.

use std::sync::Arc;

use tracing::warn;

use crate::classify::ErrorClassification;
use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::{Notification, Notifier};

/// Hook run on every request before dispatch, in registration order.
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: HttpRequest) -> Result<HttpRequest, RequestError>;
}

/// Hook run on every outcome, in registration order.
pub trait ResponseInterceptor: Send + Sync {
    /// Called for 2xx responses. The default passes the response through.
    fn on_response(&self, response: HttpResponse) -> HttpResponse {
        response
    }

    /// Called for every failure: non-2xx status, transport failure, or a
    /// request interceptor abort.
    fn on_error(&self, error: &RequestError);
}

/// Shows a notification for classified failures and logs every failure.
#[derive(Clone)]
pub struct ErrorNotifier {
    notifier: Arc<dyn Notifier>,
}

impl ErrorNotifier {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl std::fmt::Debug for ErrorNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorNotifier").finish_non_exhaustive()
    }
}

impl ResponseInterceptor for ErrorNotifier {
    fn on_error(&self, error: &RequestError) {
        let class = ErrorClassification::classify(error);
        if let Some(text) = class.notification_text(error) {
            self.notifier.notify(&Notification::error(text));
        }

        warn!(
            target: "mediahub_client::diagnostics",
            error = %error,
            status = ?error.status(),
            "request failed"
        );
    }
}
