//! Identity and flow state types.
//!
//! This module defines the domain records (users, sessions) and the
//! per-page flow state driven by the reducers. All types are `Clone` to
//! support the functional architecture pattern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ═══════════════════════════════════════════════════════════════════════
// Identity Types
// ═══════════════════════════════════════════════════════════════════════

/// Role attached to a registered account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access.
    Administrator,
    /// Ordinary signed-up user.
    Member,
    /// Read-only demo access.
    Guest,
}

impl Role {
    /// Get the role name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Member => "Member",
            Self::Guest => "Guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered identity, as held by the user directory.
///
/// Records are immutable once created; there are no update or delete
/// operations. The password is plaintext because the directory is a mock
/// standing in for a real backend — a production system substitutes a
/// verifier here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique key; matched case-sensitively, exactly as stored.
    pub email: String,
    /// Plaintext credential (mock store only).
    pub password: String,
    /// Full name shown in the dashboard.
    pub display_name: String,
    /// Account role.
    pub role: Role,
    /// Two-letter initials shown in the avatar badge.
    pub avatar_initials: String,
}

/// Registration input for [`UserDirectory::register`].
///
/// The directory derives the display name and avatar initials from the
/// name parts; callers pass the raw form values.
///
/// [`UserDirectory::register`]: crate::providers::UserDirectory::register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Given name (trimmed by the directory).
    pub first_name: String,
    /// Family name (trimmed by the directory).
    pub last_name: String,
    /// Unique email key (trimmed by the directory).
    pub email: String,
    /// Plaintext credential, stored as-is.
    pub password: String,
}

// ═══════════════════════════════════════════════════════════════════════
// Session Types
// ═══════════════════════════════════════════════════════════════════════

/// Where a session record is persisted.
///
/// Durable storage survives a restart; ephemeral storage is cleared when
/// the tab/session ends. At most one tier holds a record at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistenceTier {
    /// Survives process/tab restarts ("remember me").
    Durable,
    /// Cleared when the tab/session ends.
    Ephemeral,
}

impl PersistenceTier {
    /// Both tiers, in lookup-priority order (durable first).
    pub const ALL: [Self; 2] = [Self::Durable, Self::Ephemeral];

    /// The opposite tier.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Durable => Self::Ephemeral,
            Self::Ephemeral => Self::Durable,
        }
    }

    /// Lowercase tier name, for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Durable => "durable",
            Self::Ephemeral => "ephemeral",
        }
    }
}

impl std::fmt::Display for PersistenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proof of an authenticated interaction.
///
/// A session is a detached snapshot of the user record at login time — it
/// holds copies, not references, so later directory changes never
/// retroactively alter an active session. `login_time` is set exactly once,
/// at creation.
///
/// The serde representation is the persisted wire layout: field names
/// `email`, `name`, `role`, `avatar`, `loginTime` (ISO-8601).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Email of the signed-in account.
    pub email: String,
    /// Display name snapshot.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Role snapshot.
    pub role: Role,
    /// Avatar initials snapshot.
    #[serde(rename = "avatar")]
    pub avatar_initials: String,
    /// Instant the session was created; never mutated afterwards.
    #[serde(rename = "loginTime")]
    pub login_time: DateTime<Utc>,
}

// ═══════════════════════════════════════════════════════════════════════
// Validation Types
// ═══════════════════════════════════════════════════════════════════════

/// A form field known to the validation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Given name (sign-up).
    FirstName,
    /// Family name (sign-up).
    LastName,
    /// Email address (both flows).
    Email,
    /// Password (both flows; rule sets differ).
    Password,
    /// Password confirmation (sign-up).
    ConfirmPassword,
    /// Terms-of-service acceptance (sign-up).
    Terms,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Terms,
    ];

    /// Stable string name, as used by form views.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
        }
    }

    /// Parse a field from its string name.
    ///
    /// Unknown names yield `None`; the validation entry points treat them
    /// as valid, keeping the engine total.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping from field to error message; absence of a key means the field
/// is valid. Recomputed on demand, never persisted.
pub type ValidationErrors = BTreeMap<Field, String>;

// ═══════════════════════════════════════════════════════════════════════
// Sign-In Flow State
// ═══════════════════════════════════════════════════════════════════════

/// State for the sign-in page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInState {
    /// Current email input.
    pub email: String,
    /// Current password input.
    pub password: String,
    /// "Remember me" checkbox — selects the durable persistence tier.
    pub remember: bool,
    /// Per-field validation errors.
    pub errors: ValidationErrors,
    /// Generic authentication banner; never discloses which field was
    /// wrong.
    pub auth_error: Option<String>,
    /// A submit is in flight; further submits are rejected until it
    /// completes.
    pub loading: bool,
    /// The created session once sign-in succeeds — the navigation signal
    /// for the route guard.
    pub session: Option<Session>,
}

// ═══════════════════════════════════════════════════════════════════════
// Sign-Up Flow State
// ═══════════════════════════════════════════════════════════════════════

/// When per-field validation fires on the sign-up page.
///
/// Starts `Lazy` (validate on blur only); flips to `Eager` (revalidate
/// everything on every change) on the first submit attempt. The transition
/// is monotonic — it never reverts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Before the first submit attempt: errors appear on blur.
    #[default]
    Lazy,
    /// After the first submit attempt: errors track every edit.
    Eager,
}

impl ValidationMode {
    /// Whether live revalidation is active.
    #[must_use]
    pub const fn is_eager(self) -> bool {
        matches!(self, Self::Eager)
    }
}

/// Raw sign-up form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Given name input.
    pub first_name: String,
    /// Family name input.
    pub last_name: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Password confirmation input.
    pub confirm_password: String,
    /// Terms-of-service checkbox.
    pub terms: bool,
}

impl SignUpForm {
    /// Current value of a text field.
    ///
    /// `Terms` is a checkbox and has no text value.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::Terms => None,
        }
    }

    /// Replace the value of a text field.
    ///
    /// Returns `false` (and changes nothing) for `Terms`, which is toggled
    /// through its own action.
    pub fn set_text(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Terms => return false,
        }
        true
    }
}

/// State for the sign-up page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpState {
    /// Current form values.
    pub form: SignUpForm,
    /// Per-field validation errors.
    pub errors: ValidationErrors,
    /// Fields the user has blurred at least once.
    pub touched: BTreeSet<Field>,
    /// Lazy/eager validation mode (flips on first submit).
    pub mode: ValidationMode,
    /// A submit is in flight.
    pub loading: bool,
    /// The auto-login session once registration succeeds.
    pub session: Option<Session>,
}

impl SignUpState {
    /// The error a form view should display for `field`, if any.
    ///
    /// Errors are shown only once the field was blurred or the form was
    /// submitted — matching the lazy/eager policy.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) || self.mode.is_eager() {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }
}
