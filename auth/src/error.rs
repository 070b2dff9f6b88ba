//! Error types for the identity flows.

use thiserror::Error;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Error taxonomy for the identity flows.
///
/// Per-field validation failures are *not* errors — they are data
/// (`ValidationErrors`) returned by the validation engine. This enum covers
/// the store- and session-level failures that cross the core boundary, all
/// returned as values, never panicked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No registered account matches the email + password pair.
    ///
    /// Deliberately generic: surfaced as one banner, never per-field, so a
    /// failed sign-in does not disclose whether the email exists.
    #[error("Incorrect email or password.")]
    CredentialMismatch,

    /// The email is already registered (sign-up uniqueness violation).
    ///
    /// Unlike [`CredentialMismatch`](Self::CredentialMismatch), this *is*
    /// disclosed on the email field — uniqueness is observable
    /// pre-registration anyway.
    #[error("This email is already registered. Sign in instead.")]
    EmailTaken,

    /// The session storage backing is unavailable.
    ///
    /// The one truly unexpected condition; the core does not try to
    /// recover from it.
    #[error("Session storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Internal error (should not be exposed to users).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Returns `true` if this error is user-correctable input, as opposed
    /// to a system failure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nexus_auth::AuthError;
    /// assert!(AuthError::CredentialMismatch.is_user_error());
    /// assert!(!AuthError::StorageUnavailable("down".into()).is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::CredentialMismatch | Self::EmailTaken)
    }
}
