use reqwest::{Response, Url};

/// Result of [`GymSessionClient::auth_fetch`](crate::GymSessionClient::auth_fetch).
#[derive(Debug)]
pub enum AuthOutcome {
    /// The backend answered. Any status other than a first 401 lands here
    /// unchanged, including a 401 on the retried request.
    Success(Response),
    /// The session could not be refreshed; the user has to log in again.
    NeedsLogin {
        /// Absolute URL of the login page.
        login_url: Url,
    },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn needs_login(&self) -> bool {
        matches!(self, Self::NeedsLogin { .. })
    }

    /// Returns the response, or `None` when a login is required.
    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Success(response) => Some(response),
            Self::NeedsLogin { .. } => None,
        }
    }

    /// Sends the browser to the login page when a login is required.
    ///
    /// Returns the response otherwise. After a successful navigation the page
    /// is being torn down, so callers should stop work on `Ok(None)`.
    #[cfg(target_arch = "wasm32")]
    pub fn redirect_to_login(self) -> std::result::Result<Option<Response>, wasm_bindgen::JsValue> {
        match self {
            Self::Success(response) => Ok(Some(response)),
            Self::NeedsLogin { login_url } => {
                let window = web_sys::window()
                    .ok_or_else(|| wasm_bindgen::JsValue::from_str("no window object"))?;
                window.location().set_href(login_url.as_str())?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AuthOutcome;
    use reqwest::Url;

    #[test]
    fn needs_login_has_no_response() {
        let outcome = AuthOutcome::NeedsLogin {
            login_url: Url::parse("https://gym.example/gym/login").expect("valid url"),
        };
        assert!(outcome.needs_login());
        assert!(!outcome.is_success());
        assert!(outcome.into_response().is_none());
    }
}
