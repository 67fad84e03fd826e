/// Error type returned by this crate.
///
/// An expired session is not an error: it is reported as
/// [`AuthOutcome::NeedsLogin`](crate::AuthOutcome::NeedsLogin).
#[derive(Debug, thiserror::Error)]
pub enum AuthClientError {
    /// Network or request execution error from `reqwest`, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Request target could not be resolved against the client's base URL.
    #[error("invalid url '{url}': {message}")]
    InvalidUrl { url: String, message: String },
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// The backend kept the caller on the login page.
    #[error("login rejected")]
    LoginRejected,
    /// Request body could not be serialized.
    #[error("body encode error: {0}")]
    Body(serde_json::Error),
}
