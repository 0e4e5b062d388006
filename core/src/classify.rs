//! Status-code classification for failed requests.
//!
//! # Design
//! The mapping from status to fixed notification text is one `const` table.
//! Statuses not in the table are `Unclassified` and produce no notification;
//! a missing status means no response was received and the error's own
//! message is shown instead.

use crate::error::RequestError;

/// How a failed request is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClassification {
    /// No response was received.
    Transport,
    InternalServerError,
    GatewayTimeout,
    PayloadTooLarge,
    /// Any status without a fixed message; the caller handles it.
    Unclassified(u16),
}

const STATUS_TABLE: &[(u16, ErrorClassification, &str)] = &[
    (500, ErrorClassification::InternalServerError, "服务器内部错误"),
    (504, ErrorClassification::GatewayTimeout, "网关超时"),
    (413, ErrorClassification::PayloadTooLarge, "仅支持上传20M以内的图片"),
];

impl ErrorClassification {
    pub fn from_status(status: Option<u16>) -> Self {
        let Some(status) = status else {
            return ErrorClassification::Transport;
        };
        STATUS_TABLE
            .iter()
            .find(|(code, _, _)| *code == status)
            .map(|(_, class, _)| *class)
            .unwrap_or(ErrorClassification::Unclassified(status))
    }

    pub fn classify(error: &RequestError) -> Self {
        Self::from_status(error.status())
    }

    /// The fixed text for table-driven classes.
    pub fn fixed_message(self) -> Option<&'static str> {
        STATUS_TABLE
            .iter()
            .find(|(_, class, _)| *class == self)
            .map(|(_, _, message)| *message)
    }

    /// Text to show the user for `error`, or `None` when nothing is shown.
    pub fn notification_text(self, error: &RequestError) -> Option<String> {
        match self {
            ErrorClassification::Transport => Some(error.message()),
            ErrorClassification::Unclassified(_) => None,
            class => class.fixed_message().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    fn status_error(status: u16) -> RequestError {
        RequestError::Status {
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: Vec::new(),
            },
        }
    }

    #[test]
    fn missing_status_is_transport() {
        assert_eq!(ErrorClassification::from_status(None), ErrorClassification::Transport);
    }

    #[test]
    fn table_statuses_map_to_fixed_text() {
        for (status, text) in [(500, "服务器内部错误"), (504, "网关超时"), (413, "仅支持上传20M以内的图片")] {
            let err = status_error(status);
            let class = ErrorClassification::classify(&err);
            assert_eq!(class.notification_text(&err).as_deref(), Some(text), "status {status}");
        }
    }

    #[test]
    fn other_statuses_are_silent() {
        for status in [400, 401, 403, 404, 502, 503] {
            let err = status_error(status);
            let class = ErrorClassification::classify(&err);
            assert_eq!(class, ErrorClassification::Unclassified(status));
            assert_eq!(class.notification_text(&err), None);
        }
    }

    #[test]
    fn transport_text_is_error_message() {
        let err = RequestError::Transport {
            message: "connection refused".to_string(),
        };
        let class = ErrorClassification::classify(&err);
        assert_eq!(class.notification_text(&err).as_deref(), Some("connection refused"));
    }

    #[test]
    fn fixed_message_only_for_table_classes() {
        assert_eq!(ErrorClassification::Transport.fixed_message(), None);
        assert_eq!(ErrorClassification::Unclassified(418).fixed_message(), None);
        assert_eq!(ErrorClassification::GatewayTimeout.fixed_message(), Some("网关超时"));
    }
}
