/// Default path of the session refresh endpoint.
pub const DEFAULT_REFRESH_PATH: &str = "/gym/refresh";
/// Default path of the login page and login form.
pub const DEFAULT_LOGIN_PATH: &str = "/gym/login";
/// Default path of the logout endpoint.
pub const DEFAULT_LOGOUT_PATH: &str = "/gym/logout";
/// Cookie the backend uses for the short-lived access token.
pub const DEFAULT_ACCESS_COOKIE: &str = "access_token_cookie";

/// Configures endpoint locations and timeouts.
///
/// Paths are resolved against the client's base URL, so a mock server only
/// needs a different base URL, not different paths.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Path of the endpoint that renews the access cookie (`POST`).
    pub refresh_path: String,
    /// Path of the login page; also the target of the login form.
    pub login_path: String,
    /// Path of the endpoint that clears the session cookies (`POST`).
    pub logout_path: String,
    /// Name of the access-token cookie, used by `has_session`.
    pub access_cookie: String,
    /// Per-request timeout in milliseconds. `None` keeps the transport default.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            refresh_path: DEFAULT_REFRESH_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
            access_cookie: DEFAULT_ACCESS_COOKIE.to_owned(),
            timeout_ms: None,
        }
    }
}

impl ClientOptions {
    /// Overrides the refresh endpoint path.
    pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = path.into();
        self
    }

    /// Overrides the login page path.
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Overrides the logout endpoint path.
    pub fn logout_path(mut self, path: impl Into<String>) -> Self {
        self.logout_path = path.into();
        self
    }

    /// Sets a per-request timeout.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ClientOptions;

    #[test]
    fn defaults_point_at_gym_routes() {
        let opts = ClientOptions::default();
        assert_eq!(opts.refresh_path, "/gym/refresh");
        assert_eq!(opts.login_path, "/gym/login");
        assert_eq!(opts.logout_path, "/gym/logout");
        assert_eq!(opts.access_cookie, "access_token_cookie");
        assert_eq!(opts.timeout_ms, None);
    }

    #[test]
    fn builder_methods_override_single_fields() {
        let opts = ClientOptions::default()
            .refresh_path("/auth/refresh")
            .timeout_ms(500);
        assert_eq!(opts.refresh_path, "/auth/refresh");
        assert_eq!(opts.login_path, "/gym/login");
        assert_eq!(opts.timeout_ms, Some(500));
    }
}
