//! # Nexus Authentication
//!
//! Client-side authentication and validation engine for the Nexus demo
//! identity flow: sign-up, sign-in, and the session that gates the
//! protected dashboard.
//!
//! ## Features
//!
//! - **Pure validation**: ordered, short-circuiting per-field rule sets
//! - **Password scoring**: six-boost strength tiers for live feedback
//! - **Mock credential store**: seeded in-memory directory behind a trait
//! - **Tiered sessions**: durable ("remember me") vs ephemeral storage,
//!   at most one active session across both tiers
//! - **Testable**: every dependency injected, flows run at memory speed
//!
//! ## Architecture
//!
//! The flows are implemented as reducers and effects:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! Field edits and blurs are synchronous actions; submitting is the one
//! async edge. A submit validates, flips the in-flight flag, and returns a
//! single future that sleeps the simulated network latency, consults the
//! [`UserDirectory`], and on success writes a session snapshot through the
//! [`SessionManager`]. The resulting success/failure event re-enters the
//! reducer.
//!
//! ## Example: sign-in
//!
//! ```rust,ignore
//! use nexus_auth::*;
//!
//! let effects = reducer.reduce(
//!     &mut state,
//!     SignInAction::SubmitTapped,
//!     &env,
//! );
//!
//! // After the effect resolves and feeds back:
//! assert!(state.session.is_some());
//! ```
//!
//! [`UserDirectory`]: providers::UserDirectory
//! [`SessionManager`]: session::SessionManager

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod actions;
pub mod constants;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducers;
pub mod session;
pub mod state;
pub mod stores;
pub mod strength;
pub mod validation;

// Re-export main types for convenience
pub use actions::{SignInAction, SignUpAction};
pub use environment::AuthEnvironment;
pub use error::{AuthError, Result};
pub use session::SessionManager;
pub use state::{
    Field, NewUser, PersistenceTier, Role, Session, SignInState, SignUpForm, SignUpState,
    UserRecord, ValidationErrors, ValidationMode,
};
