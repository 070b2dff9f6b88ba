//! Flow actions.
//!
//! Actions are the only way to communicate with a flow: user interactions
//! are **commands**, results of the async submit effects are **events**.
//! The reducers are pure functions `(State, Action, Env) → Effects`.

use crate::error::AuthError;
use crate::state::{Field, Session};

/// Sign-in page action.
#[derive(Debug, Clone, PartialEq)]
pub enum SignInAction {
    // ═══════════════════════════════════════════════════════════════════
    // Commands (user interactions)
    // ═══════════════════════════════════════════════════════════════════
    /// The email input changed.
    ///
    /// Clears that field's error and the auth banner, so stale feedback
    /// never lingers over fresh input.
    EmailChanged(String),

    /// The password input changed.
    PasswordChanged(String),

    /// The "remember me" checkbox toggled.
    ///
    /// Selects the durable persistence tier for the next successful
    /// sign-in.
    RememberChanged(bool),

    /// An input lost focus; validate just that field.
    FieldBlurred(Field),

    /// A demo credential chip was clicked: fill both fields and reset all
    /// error feedback.
    FillDemoAccount {
        /// Seeded email.
        email: String,
        /// Seeded password.
        password: String,
    },

    /// The form was submitted.
    ///
    /// Ignored while a submit is already in flight. Otherwise validates
    /// everything; only a clean form reaches the credential check.
    SubmitTapped,

    // ═══════════════════════════════════════════════════════════════════
    // Events (produced by the submit effect)
    // ═══════════════════════════════════════════════════════════════════
    /// Credentials matched and the session was persisted.
    SignInSucceeded {
        /// The created session snapshot.
        session: Session,
    },

    /// The submit failed — credential mismatch or storage failure.
    SignInFailed {
        /// What went wrong.
        error: AuthError,
    },
}

/// Sign-up page action.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpAction {
    // ═══════════════════════════════════════════════════════════════════
    // Commands (user interactions)
    // ═══════════════════════════════════════════════════════════════════
    /// A text input changed.
    ///
    /// Before the first submit attempt errors are left to blur
    /// (lazy mode); afterwards every change revalidates the whole form
    /// (eager mode).
    TextChanged {
        /// Which field changed.
        field: Field,
        /// The new raw value.
        value: String,
    },

    /// The terms-of-service checkbox toggled.
    TermsToggled(bool),

    /// An input lost focus; mark it touched and validate just that field.
    FieldBlurred(Field),

    /// The form was submitted.
    ///
    /// Switches validation to eager mode (monotonic — it never reverts),
    /// validates everything, and only a clean form reaches registration.
    /// Ignored while a submit is already in flight.
    SubmitTapped,

    // ═══════════════════════════════════════════════════════════════════
    // Events (produced by the submit effect)
    // ═══════════════════════════════════════════════════════════════════
    /// Registration and auto-login completed.
    SignUpSucceeded {
        /// The auto-login session snapshot.
        session: Session,
    },

    /// The submit failed — email taken at commit time, or a storage
    /// failure during auto-login.
    SignUpFailed {
        /// What went wrong.
        error: AuthError,
    },
}
