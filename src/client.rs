use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use reqwest::cookie::Jar;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;

use crate::{
    request::Attempt, transport::Transport, AuthClientError, AuthOutcome, ClientOptions,
    RequestOptions, Result,
};

#[derive(Clone)]
/// HTTP client for the gym dashboard API.
///
/// Session cookies set by the backend are kept by the client and sent with
/// every [`auth_fetch`](Self::auth_fetch) call. An expired access cookie is
/// renewed once through the refresh endpoint before giving up.
pub struct GymSessionClient {
    transport: Transport,
    base_url: Url,
    options: ClientOptions,
}

impl fmt::Debug for GymSessionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GymSessionClient")
            .field("base_url", &self.base_url.as_str())
            .field("cookies", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

#[derive(Serialize)]
struct LoginForm<'a> {
    email: &'a str,
    password: &'a str,
}

impl GymSessionClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// Relative targets passed to [`auth_fetch`](Self::auth_fetch) and the
    /// endpoint paths in [`ClientOptions`] are resolved against it.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let raw = base_url.as_ref().trim();
        let base_url = Url::parse(raw).map_err(|err| AuthClientError::InvalidUrl {
            url: raw.to_owned(),
            message: err.to_string(),
        })?;
        Ok(Self {
            transport: Transport::new()?,
            base_url,
            options: ClientOptions::default(),
        })
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `GYM_BASE_URL` — backend origin, e.g. `https://gym.example.com`
    /// - `GYM_REFRESH_PATH`, `GYM_LOGIN_PATH`, `GYM_LOGOUT_PATH` — optional
    ///   endpoint overrides
    ///
    /// **Not available on `wasm32` targets** — use [`GymSessionClient::new`]
    /// with the page origin instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gym_session_http::GymSessionClient;
    ///
    /// let client = GymSessionClient::from_env().expect("missing GYM_BASE_URL");
    /// ```
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> std::result::Result<Self, String> {
        let base_url = std::env::var("GYM_BASE_URL")
            .map_err(|_| "missing GYM_BASE_URL environment variable".to_owned())?;
        if base_url.trim().is_empty() {
            return Err("GYM_BASE_URL is set but empty".to_owned());
        }

        let mut options = ClientOptions::default();
        if let Some(path) = env_path("GYM_REFRESH_PATH") {
            options.refresh_path = path;
        }
        if let Some(path) = env_path("GYM_LOGIN_PATH") {
            options.login_path = path;
        }
        if let Some(path) = env_path("GYM_LOGOUT_PATH") {
            options.logout_path = path;
        }

        Self::new(base_url)
            .map(|client| client.with_options(options))
            .map_err(|err| err.to_string())
    }

    /// Applies endpoint and timeout options.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Cookie jar shared by every request that includes credentials.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        self.transport.jar()
    }

    /// Whether an access cookie is currently held for the base URL.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn has_session(&self) -> bool {
        self.transport
            .has_cookie(&self.base_url, &self.options.access_cookie)
    }

    /// Absolute URL of the login page.
    pub fn login_url(&self) -> Result<Url> {
        self.resolve(&self.options.login_path)
    }

    /// Sends a request with session cookies, refreshing the session once on 401.
    ///
    /// The caller's `options` are copied; their credential mode is replaced
    /// by [`Credentials::Include`](crate::Credentials::Include) on the copy
    /// only. Transport failures are returned as
    /// [`AuthClientError::Transport`] without any retry.
    ///
    /// When the first response is 401 and `url` is not the refresh endpoint,
    /// the refresh endpoint is called. If that succeeds the original request is
    /// sent once more and its response is returned whatever its status. If it
    /// fails, [`AuthOutcome::NeedsLogin`] is returned.
    pub async fn auth_fetch(&self, url: &str, options: &RequestOptions) -> Result<AuthOutcome> {
        let target = self.resolve(url)?;
        let mut attempt = Attempt::with_cookies(options);

        loop {
            let response = self.send(&target, &attempt).await?;

            if response.status() != StatusCode::UNAUTHORIZED
                || attempt.retry
                || self.is_refresh_target(&target)
            {
                return Ok(AuthOutcome::Success(response));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(url = %target, "access token rejected, refreshing session");

            if !self.refresh().await? {
                #[cfg(feature = "tracing")]
                tracing::info!(url = %target, "session refresh rejected, login required");

                return Ok(AuthOutcome::NeedsLogin {
                    login_url: self.login_url()?,
                });
            }

            attempt = attempt.into_retry();
        }
    }

    /// Calls the refresh endpoint and reports whether it answered 2xx.
    pub async fn refresh(&self) -> Result<bool> {
        let url = self.resolve(&self.options.refresh_path)?;
        let response = self
            .send(&url, &Attempt::with_cookies(&RequestOptions::post()))
            .await?;
        Ok(response.status().is_success())
    }

    /// Submits the login form. On success the session cookies are stored.
    ///
    /// The backend redirects away from the login page when it accepts the
    /// credentials and renders the page again when it does not.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let url = self.login_url()?;
        let form = LoginForm {
            email: email.trim(),
            password,
        };
        let response = self
            .prepare(Method::POST, url.clone(), None)
            .form(&form)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let response = ensure_success(response).await?;
        if response.url().path() == url.path() {
            #[cfg(feature = "tracing")]
            tracing::info!("login rejected by backend");

            return Err(AuthClientError::LoginRejected);
        }
        Ok(())
    }

    /// Asks the backend to clear the session cookies.
    pub async fn logout(&self) -> Result<()> {
        let url = self.resolve(&self.options.logout_path)?;
        let response = self
            .send(&url, &Attempt::with_cookies(&RequestOptions::post()))
            .await?;
        ensure_success(response).await.map(|_| ())
    }

    /// Resolves `target` against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, target: &str) -> Result<Url> {
        self.base_url
            .join(target)
            .map_err(|err| AuthClientError::InvalidUrl {
                url: target.to_owned(),
                message: err.to_string(),
            })
    }

    fn is_refresh_target(&self, target: &Url) -> bool {
        target.path().contains(self.options.refresh_path.as_str())
    }

    async fn send(&self, target: &Url, attempt: &Attempt) -> Result<Response> {
        let opts = &attempt.options;
        let mut request = self
            .prepare(opts.method.clone(), target.clone(), opts.timeout)
            .headers(opts.headers.clone());
        if let Some(body) = &opts.body {
            request = request.body(body.clone());
        }
        request.send().await.map_err(|err| self.transport_error(err))
    }

    fn prepare(&self, method: Method, url: Url, timeout: Option<Duration>) -> RequestBuilder {
        let request = self.transport.request(method, url);
        match timeout.or_else(|| self.options.timeout_ms.map(Duration::from_millis)) {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> AuthClientError {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %err, "network error");

        AuthClientError::Transport(err)
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.map_err(AuthClientError::Transport)?;
    Err(AuthClientError::Http {
        status: status.as_u16(),
        body,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn env_path(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
