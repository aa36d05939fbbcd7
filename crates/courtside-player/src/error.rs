//! Error types for the player layer.

/// Errors that can occur during player lookup, registration, and login.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// No player is registered under the given email.
    #[error("no player registered under {0}")]
    NotFound(String),

    /// Login rejected. Deliberately covers both "unknown email" and
    /// "wrong password" so a failed login never reveals whether an
    /// account exists.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// A player is already registered under this email — email is the
    /// unique natural key for the whole directory.
    #[error("email {0} is already taken")]
    EmailTaken(String),

    /// The registration draft was malformed (missing fields).
    #[error("invalid player draft: {0}")]
    Validation(String),

    /// The directory backend failed. Fatal; propagated unmodified.
    #[error("player directory backend failure: {0}")]
    Backend(String),
}
