//! Session storage port.

use crate::error::Result;
use crate::state::PersistenceTier;

/// Key-value storage with two named regions, one per persistence tier.
///
/// This is the seam in front of the client-global storage areas (the
/// browser's durable and per-tab stores); the shape deliberately mirrors
/// their `getItem`/`setItem`/`removeItem` API. The
/// [`SessionManager`](crate::SessionManager) is the only writer.
///
/// Methods are fallible because a real backing store can be unavailable;
/// the in-memory implementation never fails.
pub trait StoragePort: Send + Sync {
    /// Read the value stored under `key` in `tier`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageUnavailable`](crate::AuthError::StorageUnavailable)
    /// if the backing store cannot be reached.
    fn get_item(&self, tier: PersistenceTier, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key` in `tier`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageUnavailable`](crate::AuthError::StorageUnavailable)
    /// if the backing store cannot be reached.
    fn set_item(&self, tier: PersistenceTier, key: &str, value: &str) -> Result<()>;

    /// Remove `key` from `tier`; removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageUnavailable`](crate::AuthError::StorageUnavailable)
    /// if the backing store cannot be reached.
    fn remove_item(&self, tier: PersistenceTier, key: &str) -> Result<()>;
}
