//! Bearer-token request interceptor.

use std::sync::Arc;

use crate::cookie::CookieStore;
use crate::error::RequestError;
use crate::http::HttpRequest;
use crate::interceptor::RequestInterceptor;

/// Cookie holding the SSO access token.
pub const ACCESS_TOKEN_COOKIE: &str = "sso_0voice_access_token";

/// Sets `Authorization: Bearer <token>` from the access-token cookie.
///
/// The cookie is read on every request and never cached, so a token issued
/// or cleared by the login flow takes effect on the next request. Without a
/// token the request is left untouched.
#[derive(Clone)]
pub struct BearerAuth {
    cookies: Arc<dyn CookieStore>,
    cookie_name: String,
}

impl BearerAuth {
    pub fn new(cookies: Arc<dyn CookieStore>) -> Self {
        Self {
            cookies,
            cookie_name: ACCESS_TOKEN_COOKIE.to_string(),
        }
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("cookie_name", &self.cookie_name)
            .finish_non_exhaustive()
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, mut request: HttpRequest) -> Result<HttpRequest, RequestError> {
        let Some(token) = self.cookies.get(&self.cookie_name).filter(|t| !t.is_empty()) else {
            return Ok(request);
        };
        if let Some(bad) = token.chars().find(|c| !is_header_value_char(*c)) {
            return Err(RequestError::InvalidHeader {
                name: "authorization".to_string(),
                reason: format!("token contains invalid character {bad:?}"),
            });
        }
        request.set_header("Authorization", format!("Bearer {token}"));
        Ok(request)
    }
}

/// Visible ASCII plus space and tab.
fn is_header_value_char(c: char) -> bool {
    c == ' ' || c == '\t' || c.is_ascii_graphic()
}
