//! Flow environment.
//!
//! This module defines the environment type for dependency injection in
//! the flow reducers.

use crate::providers::{StoragePort, UserDirectory};
use crate::session::SessionManager;
use std::time::Duration;

/// Dependencies injected into the flow reducers.
///
/// # Type Parameters
///
/// - `D`: User directory (credential store)
/// - `P`: Storage port backing the session manager
///
/// Providers must be `Clone` because the submit effects capture their own
/// handles; the in-memory implementations share state across clones.
#[derive(Clone)]
pub struct AuthEnvironment<D, P>
where
    D: UserDirectory + Clone,
    P: StoragePort + Clone,
{
    /// Credential store.
    pub directory: D,

    /// Session lifecycle manager.
    pub sessions: SessionManager<P>,

    /// Simulated network latency applied inside the submit effect.
    ///
    /// A placeholder for a real asynchronous call; tests inject
    /// `Duration::ZERO`.
    pub latency: Duration,
}

impl<D, P> AuthEnvironment<D, P>
where
    D: UserDirectory + Clone,
    P: StoragePort + Clone,
{
    /// Create a new flow environment.
    #[must_use]
    pub const fn new(directory: D, sessions: SessionManager<P>, latency: Duration) -> Self {
        Self {
            directory,
            sessions,
            latency,
        }
    }
}
