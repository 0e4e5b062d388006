//! Network transport behind `HttpClient`.
//!
//! # Design
//! A transport returns every HTTP status as data; only failures to get a
//! response at all are errors. Deciding what counts as success is the
//! client's job, so interceptors see the same error shape whichever
//! transport is plugged in. Bodies are read as raw bytes so a binary or
//! non-UTF-8 body never hides the status it came with.

use ureq::Agent;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Largest response body `UreqTransport` reads by default (256 MiB).
pub const DEFAULT_BODY_LIMIT: u64 = 256 * 1024 * 1024;

/// Executes one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// Blocking transport over a shared `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, limit: u64) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn transport_error(err: ureq::Error) -> RequestError {
    RequestError::Transport {
        message: err.to_string(),
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        let url = request.url.as_str();
        let headers = &request.headers;
        let body = request.body.as_deref().map(str::as_bytes);

        // GET, DELETE and HEAD carry a body only when the caller set one.
        let result = match (request.method, body) {
            (HttpMethod::Get, None) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Get, Some(body)) => with_headers(self.agent.get(url), headers).force_send_body().send(body),
            (HttpMethod::Delete, None) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Delete, Some(body)) => {
                with_headers(self.agent.delete(url), headers).force_send_body().send(body)
            }
            (HttpMethod::Head, None) => with_headers(self.agent.head(url), headers).call(),
            (HttpMethod::Head, Some(body)) => with_headers(self.agent.head(url), headers).force_send_body().send(body),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(url), headers).send(body),
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(url), headers).send(body),
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), headers).send_empty(),
            (HttpMethod::Patch, Some(body)) => with_headers(self.agent.patch(url), headers).send(body),
            (HttpMethod::Patch, None) => with_headers(self.agent.patch(url), headers).send_empty(),
        };
        let mut response = result.map_err(transport_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = if request.method == HttpMethod::Head {
            Vec::new()
        } else {
            response
                .body_mut()
                .with_config()
                .limit(self.body_limit)
                .read_to_vec()
                .map_err(transport_error)?
        };

        Ok(HttpResponse { status, headers, body })
    }
}
