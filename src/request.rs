use std::time::Duration;

use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Method,
};
use serde::Serialize;

use crate::{AuthClientError, Result};

/// Whether session cookies travel with a request.
///
/// Mirrors the Fetch API `credentials` mode.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Credentials {
    /// Never attach cookies.
    Omit,
    /// Attach cookies only when the target shares the base URL's origin.
    #[default]
    SameOrigin,
    /// Always attach cookies.
    Include,
}

/// Per-request settings: method, headers, body, credential mode.
///
/// Passed to [`GymSessionClient::auth_fetch`](crate::GymSessionClient::auth_fetch)
/// by reference. The client works on its own copy, so one value can be reused
/// across any number of calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub credentials: Credentials,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::method(Method::POST)
    }

    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as the JSON body and sets `Content-Type`.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(AuthClientError::Body)?;
        Ok(self
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )
            .body(body))
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// One call's working copy of the caller's options.
///
/// `retry` is set once the session has been refreshed; it never reaches the
/// caller's [`RequestOptions`].
#[derive(Clone, Debug)]
pub(crate) struct Attempt {
    pub(crate) options: RequestOptions,
    pub(crate) retry: bool,
}

impl Attempt {
    /// Copies `options` and forces cookies on.
    pub(crate) fn with_cookies(options: &RequestOptions) -> Self {
        Self {
            options: options.clone().credentials(Credentials::Include),
            retry: false,
        }
    }

    pub(crate) fn into_retry(self) -> Self {
        Self {
            retry: true,
            ..self
        }
    }
}
