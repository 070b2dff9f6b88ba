//! User directory trait.

use crate::error::Result;
use crate::state::{NewUser, UserRecord};

/// Registry of known accounts.
///
/// This trait abstracts over the credential backend. The demo implements
/// it with a seeded in-memory store ([`crate::stores::InMemoryDirectory`]);
/// a real system would put an API client here.
///
/// # Implementation Notes
///
/// - Email is the unique key, matched case-sensitively, exactly as stored.
/// - Records are immutable once registered; there are no update or delete
///   operations.
/// - Lookups are synchronous: the mock is in-process, and the flows model
///   their network latency separately as an effect.
pub trait UserDirectory: Send + Sync {
    /// Find the account matching both email and password exactly.
    ///
    /// Used by sign-in. Returns `None` for any non-matching pair without
    /// distinguishing which half was wrong.
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<UserRecord>;

    /// Whether an account with this email already exists.
    ///
    /// Used by sign-up validation; existence by email is disclosable,
    /// unlike credential matches.
    fn is_email_taken(&self, email: &str) -> bool;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailTaken`](crate::AuthError::EmailTaken) if
    /// the email already exists; the store is left unmodified in that
    /// case.
    fn register(&self, new_user: NewUser) -> Result<UserRecord>;
}
