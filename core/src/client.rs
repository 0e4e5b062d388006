//! The interceptor pipeline around a transport.
//!
//! # Design
//! `HttpClient` holds its configuration, a transport and two interceptor
//! lists; it carries no per-request state, so clones are cheap and can be
//! shared across threads. Every request follows the same path:
//!
//! 1. request interceptors, in registration order (an error aborts dispatch),
//! 2. the transport,
//! 3. a status outside 2xx becomes `RequestError::Status`,
//! 4. response interceptors, in registration order: `on_response` for
//!    successes, `on_error` for every failure from steps 1-3.
//!
//! The error returned to the caller is the one produced in steps 1-3.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::auth::BearerAuth;
use crate::config::ClientConfig;
use crate::cookie::CookieStore;
use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::interceptor::{ErrorNotifier, RequestInterceptor, ResponseInterceptor};
use crate::notify::Notifier;
use crate::transport::{Transport, UreqTransport};

/// Pre-configured client for the MediaHub API.
#[derive(Clone)]
pub struct HttpClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn builder(config: ClientConfig) -> HttpClientBuilder {
        HttpClientBuilder {
            config,
            transport: None,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// The standard MediaHub client: bearer auth from `cookies`, failures
    /// reported to `notifier`.
    pub fn mediahub(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        cookies: Arc<dyn CookieStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::builder(config)
            .transport(transport)
            .request_interceptor(BearerAuth::new(cookies))
            .response_interceptor(ErrorNotifier::new(notifier))
            .build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A request for `path` resolved against the base URL, not yet sent.
    pub fn build(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, self.config.resolve(path))
    }

    pub fn get(&self, path: &str) -> Result<HttpResponse, RequestError> {
        self.send(self.build(HttpMethod::Get, path))
    }

    pub fn delete(&self, path: &str) -> Result<HttpResponse, RequestError> {
        self.send(self.build(HttpMethod::Delete, path))
    }

    pub fn head(&self, path: &str) -> Result<HttpResponse, RequestError> {
        self.send(self.build(HttpMethod::Head, path))
    }

    pub fn post(&self, path: &str, body: impl Into<String>) -> Result<HttpResponse, RequestError> {
        self.send(self.build(HttpMethod::Post, path).with_body(body))
    }

    pub fn put(&self, path: &str, body: impl Into<String>) -> Result<HttpResponse, RequestError> {
        self.send(self.build(HttpMethod::Put, path).with_body(body))
    }

    pub fn patch(&self, path: &str, body: impl Into<String>) -> Result<HttpResponse, RequestError> {
        self.send(self.build(HttpMethod::Patch, path).with_body(body))
    }

    pub fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<HttpResponse, RequestError> {
        self.send_json(HttpMethod::Post, path, body)
    }

    pub fn put_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<HttpResponse, RequestError> {
        self.send_json(HttpMethod::Put, path, body)
    }

    pub fn patch_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<HttpResponse, RequestError> {
        self.send_json(HttpMethod::Patch, path, body)
    }

    /// Run `request` through the interceptors and the transport.
    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        match self.dispatch(request) {
            Ok(response) => Ok(self
                .response_interceptors
                .iter()
                .fold(response, |response, interceptor| interceptor.on_response(response))),
            Err(error) => self.fail(error),
        }
    }

    /// Serialization failures go through `send`'s error path like any other
    /// failure, so they are logged and notified too.
    fn send_json<T: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &T,
    ) -> Result<HttpResponse, RequestError> {
        match self.build(method, path).with_json_body(body) {
            Ok(request) => self.send(request),
            Err(error) => self.fail(error),
        }
    }

    fn fail(&self, error: RequestError) -> Result<HttpResponse, RequestError> {
        for interceptor in &self.response_interceptors {
            interceptor.on_error(&error);
        }
        Err(error)
    }

    fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let request = self
            .request_interceptors
            .iter()
            .try_fold(request, |request, interceptor| interceptor.on_request(request))?;

        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");
        let response = self.transport.send(&request)?;
        debug!(status = response.status, url = %request.url, "response received");

        if response.is_success() {
            Ok(response)
        } else {
            Err(RequestError::Status { response })
        }
    }
}

/// Registers a transport and interceptors for an `HttpClient`.
pub struct HttpClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl HttpClientBuilder {
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Defaults to `UreqTransport` when no transport was set.
    pub fn build(self) -> HttpClient {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(UreqTransport::new()),
        };
        HttpClient {
            config: self.config,
            transport,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        }
    }
}
