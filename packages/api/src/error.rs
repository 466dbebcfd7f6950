use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. The payload is the
    /// message to show the user, already extracted from the response body.
    #[error("{0}")]
    Api(String),

    /// The request never produced a response (network down, CORS, DNS).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A login response that carried no token in any known field.
    #[error("No token returned from server")]
    MissingToken,
}

/// Whether a failure message looks like an expired or rejected credential.
///
/// The backend is not consistent about status codes on protected routes, so
/// mutations scan the message for auth-ish keywords before forcing a re-login.
pub fn is_auth_error(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("token") || lower.contains("auth")
}
