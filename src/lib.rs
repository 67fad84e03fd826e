//! `gym-session-http` is an async HTTP client for the gym dashboard API.
//!
//! Requests go out with the session cookies attached. When the backend
//! answers 401 the client renews the access cookie once and retries:
//! - [`GymSessionClient::auth_fetch`]
//! - [`GymSessionClient::login`]
//! - [`GymSessionClient::logout`]
//!
//! A session that cannot be renewed is reported as
//! [`AuthOutcome::NeedsLogin`] rather than as an error.

mod client;
mod error;
mod options;
mod outcome;
mod request;
mod transport;

pub use client::GymSessionClient;
pub use error::AuthClientError;
pub use options::{
    ClientOptions, DEFAULT_ACCESS_COOKIE, DEFAULT_LOGIN_PATH, DEFAULT_LOGOUT_PATH,
    DEFAULT_REFRESH_PATH,
};
pub use outcome::AuthOutcome;
pub use request::{Credentials, RequestOptions};

pub use reqwest::{Method, Response, StatusCode, Url};

pub type Result<T> = std::result::Result<T, AuthClientError>;
