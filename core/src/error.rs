//! Error types for the MediaHub HTTP client.
//!
//! # Design
//! `RequestError` is the single failure type of the request pipeline. The
//! variant tells the error notifier whether a response was received at all:
//! only `Status` carries one, every other variant is reported without a
//! status. The `Display` text doubles as the user-facing message for
//! failures that have no fixed notification text.

use thiserror::Error;

use crate::http::HttpResponse;

/// Errors returned by `HttpClient` request methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No response was received: DNS failure, refused or aborted connection.
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a status outside the 2xx range.
    #[error("Request failed with status code {}", .response.status)]
    Status { response: HttpResponse },

    /// A request interceptor could not build a header value.
    #[error("invalid value for header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl RequestError {
    /// Status code of the response that caused the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { response } => Some(response.status),
            _ => None,
        }
    }

    /// The response that caused the error, if one was received.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            RequestError::Status { response } => Some(response),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors raised while loading `ClientConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to load client configuration: {0}")]
    Extract(String),

    #[error("api_base_url must not be empty")]
    EmptyBaseUrl,
}
