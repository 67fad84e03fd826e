#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Method, RequestBuilder, Url};

#[cfg(not(target_arch = "wasm32"))]
use crate::AuthClientError;
use crate::Result;

/// Sends every request with the session cookies attached.
///
/// Native targets keep a shared [`Jar`] wired into the `reqwest` client. On
/// WASM the browser owns the cookies and `fetch` is told to include them.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    #[cfg(not(target_arch = "wasm32"))]
    jar: Arc<Jar>,
    http: reqwest::Client,
}

impl Transport {
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn new() -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(AuthClientError::Transport)?;
        Ok(Self { jar, http })
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
        })
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);

        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        builder
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn jar(&self) -> &Arc<Jar> {
        &self.jar
    }

    /// Whether the jar would send a cookie called `name` to `url`.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn has_cookie(&self, url: &Url, name: &str) -> bool {
        let Some(header) = self.jar.cookies(url) else {
            return false;
        };
        header.to_str().is_ok_and(|pairs| {
            pairs
                .split(';')
                .filter_map(|pair| pair.trim().split_once('='))
                .any(|(key, value)| key == name && !value.is_empty())
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::Transport;
    use reqwest::Url;

    #[test]
    fn has_cookie_reads_the_shared_jar() {
        let transport = Transport::new().expect("transport must build");
        let base = Url::parse("http://gym.example/").expect("valid url");
        assert!(!transport.has_cookie(&base, "access_token_cookie"));

        transport
            .jar()
            .add_cookie_str("access_token_cookie=abc; Path=/", &base);
        assert!(transport.has_cookie(&base, "access_token_cookie"));
        assert!(!transport.has_cookie(&base, "refresh_token_cookie"));
    }

    #[test]
    fn empty_cookie_value_is_not_a_session() {
        let transport = Transport::new().expect("transport must build");
        let base = Url::parse("http://gym.example/").expect("valid url");
        transport
            .jar()
            .add_cookie_str("access_token_cookie=; Path=/", &base);
        assert!(!transport.has_cookie(&base, "access_token_cookie"));
    }
}
