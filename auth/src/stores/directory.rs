//! Seeded in-memory user directory.

use crate::error::{AuthError, Result};
use crate::providers::UserDirectory;
use crate::state::{NewUser, Role, UserRecord};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory user directory.
///
/// Holds the fixed demo seed set plus anything registered at runtime.
/// Lifetime is the process lifetime — no persistence across restarts,
/// intentionally, since this stands in for a real backend. Cloning is
/// cheap and clones share the same records.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    users: Arc<Mutex<Vec<UserRecord>>>,
}

fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            email: "admin@example.com".to_string(),
            password: "Admin@123".to_string(),
            display_name: "Admin User".to_string(),
            role: Role::Administrator,
            avatar_initials: "AU".to_string(),
        },
        UserRecord {
            email: "user@example.com".to_string(),
            password: "User@1234".to_string(),
            display_name: "John Doe".to_string(),
            role: Role::Member,
            avatar_initials: "JD".to_string(),
        },
        UserRecord {
            email: "demo@example.com".to_string(),
            password: "Demo@1234".to_string(),
            display_name: "Demo User".to_string(),
            role: Role::Guest,
            avatar_initials: "DU".to_string(),
        },
    ]
}

impl InMemoryDirectory {
    /// Directory pre-loaded with the fixed demo accounts.
    #[must_use]
    pub fn with_seed_users() -> Self {
        Self {
            users: Arc::new(Mutex::new(seed_users())),
        }
    }

    /// Empty directory, for tests that want full control over contents.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of stored records (for tests).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UserRecord>> {
        // A poisoned lock only means another thread panicked mid-read;
        // the records themselves are always in a consistent state.
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::with_seed_users()
    }
}

/// First letter of each name part, uppercased — "Jane" + "Smith" → "JS".
fn avatar_initials(first_name: &str, last_name: &str) -> String {
    [first_name, last_name]
        .iter()
        .filter_map(|name| name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

impl UserDirectory for InMemoryDirectory {
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.lock()
            .iter()
            .find(|user| user.email == email && user.password == password)
            .cloned()
    }

    fn is_email_taken(&self, email: &str) -> bool {
        self.lock().iter().any(|user| user.email == email)
    }

    fn register(&self, new_user: NewUser) -> Result<UserRecord> {
        let first_name = new_user.first_name.trim();
        let last_name = new_user.last_name.trim();
        let email = new_user.email.trim();

        let mut users = self.lock();
        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let record = UserRecord {
            email: email.to_string(),
            password: new_user.password,
            display_name: format!("{first_name} {last_name}"),
            role: Role::Member,
            avatar_initials: avatar_initials(first_name, last_name),
        };
        users.push(record.clone());
        Ok(record)
    }
}
