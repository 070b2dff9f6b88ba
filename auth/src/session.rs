//! Session lifecycle.
//!
//! The [`SessionManager`] is the only component with side-effecting state:
//! it owns session creation, persistence-tier selection, lookup, and
//! teardown. Everything goes through the injected [`StoragePort`]; no
//! other component writes to the storage regions.
//!
//! Per client context the lifecycle is a two-state machine:
//! **LoggedOut** → `sign_in` → **LoggedIn** → `sign_out` → **LoggedOut**.
//! A new sign-in overwrites any prior session; there are no intermediate
//! states.

use crate::constants::SESSION_STORAGE_KEY;
use crate::error::Result;
use crate::providers::StoragePort;
use crate::state::{PersistenceTier, Session, UserRecord};
use nexus_core::environment::Clock;
use std::sync::Arc;

/// Owns the tiered session records behind a [`StoragePort`].
///
/// Invariant: at most one tier holds a session at any time. `sign_in`
/// clears the inactive tier before writing the chosen one, so a
/// remember-me sign-in after a plain one (or vice versa) can never leave
/// a stale record behind.
pub struct SessionManager<P: StoragePort> {
    port: P,
    clock: Arc<dyn Clock>,
}

impl<P: StoragePort> SessionManager<P> {
    /// Create a manager over `port`, stamping sessions with `clock`.
    #[must_use]
    pub fn new(port: P, clock: Arc<dyn Clock>) -> Self {
        Self { port, clock }
    }

    /// Create a session for `user` and persist it.
    ///
    /// The snapshot's `login_time` is taken from the clock exactly once,
    /// here. `persistent` selects the durable tier ("remember me");
    /// otherwise the record goes to the ephemeral tier. The other tier is
    /// cleared first, preserving the at-most-one-session invariant even if
    /// the write itself fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageUnavailable`] if the port fails, and
    /// [`AuthError::Internal`] if the record cannot be encoded.
    ///
    /// [`AuthError::StorageUnavailable`]: crate::AuthError::StorageUnavailable
    /// [`AuthError::Internal`]: crate::AuthError::Internal
    pub fn sign_in(&self, user: &UserRecord, persistent: bool) -> Result<Session> {
        let session = Session {
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
            avatar_initials: user.avatar_initials.clone(),
            login_time: self.clock.now(),
        };

        let payload = serde_json::to_string(&session)
            .map_err(|err| crate::AuthError::Internal(format!("encoding session: {err}")))?;

        let tier = if persistent {
            PersistenceTier::Durable
        } else {
            PersistenceTier::Ephemeral
        };
        self.port.remove_item(tier.other(), SESSION_STORAGE_KEY)?;
        self.port.set_item(tier, SESSION_STORAGE_KEY, &payload)?;

        tracing::debug!(email = %session.email, %tier, "session created");
        Ok(session)
    }

    /// The currently active session, if any.
    ///
    /// Checks the durable tier first, then the ephemeral one. A stored
    /// value that fails to decode is logged and treated as absent — a
    /// corrupt record fails open to logged-out, never to a crash — and the
    /// remaining tier is still consulted.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageUnavailable`] only if the port itself
    /// fails.
    ///
    /// [`AuthError::StorageUnavailable`]: crate::AuthError::StorageUnavailable
    pub fn active_session(&self) -> Result<Option<Session>> {
        for tier in PersistenceTier::ALL {
            let Some(raw) = self.port.get_item(tier, SESSION_STORAGE_KEY)? else {
                continue;
            };
            match serde_json::from_str::<Session>(&raw) {
                Ok(session) => return Ok(Some(session)),
                Err(err) => {
                    tracing::warn!(%tier, error = %err, "malformed session record; treating as signed out");
                }
            }
        }
        Ok(None)
    }

    /// Clear both tiers unconditionally. Idempotent: signing out while
    /// logged out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageUnavailable`] only if the port itself
    /// fails.
    ///
    /// [`AuthError::StorageUnavailable`]: crate::AuthError::StorageUnavailable
    pub fn sign_out(&self) -> Result<()> {
        for tier in PersistenceTier::ALL {
            self.port.remove_item(tier, SESSION_STORAGE_KEY)?;
        }
        tracing::debug!("session destroyed");
        Ok(())
    }
}

impl<P: StoragePort + Clone> Clone for SessionManager<P> {
    fn clone(&self) -> Self {
        Self {
            port: self.port.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}
