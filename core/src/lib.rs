//! HTTP client for the MediaHub web API.
//!
//! # Overview
//! `HttpClient` wraps a `Transport` in a chain of interceptors. Request
//! interceptors run before dispatch (the standard one attaches the SSO bearer
//! token read from the cookie store); response interceptors observe every
//! outcome (the standard one turns failures into user notifications and a
//! diagnostic log event).
//!
//! # Design
//! - `HttpClient` is an explicit value built by the caller; there is no
//!   global instance.
//! - `HttpRequest` / `HttpResponse` are plain data, so the pipeline is
//!   deterministic and testable with an in-memory transport.
//! - Failures are returned to the caller exactly as the transport or the
//!   interceptor produced them. Interceptors only observe errors.
//! - Status-to-message mapping lives in a single table in `classify`.

pub mod auth;
pub mod classify;
pub mod client;
pub mod config;
pub mod cookie;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod notify;
pub mod transport;

pub use auth::{BearerAuth, ACCESS_TOKEN_COOKIE};
pub use classify::ErrorClassification;
pub use client::{HttpClient, HttpClientBuilder};
pub use config::ClientConfig;
pub use self::cookie::{CookieJar, CookieStore, SharedCookieJar};
pub use error::{ConfigError, RequestError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use interceptor::{ErrorNotifier, RequestInterceptor, ResponseInterceptor};
pub use notify::{Notification, NotificationKind, Notifier, TracingNotifier};
pub use transport::{Transport, UreqTransport, DEFAULT_BODY_LIMIT};
