//! Flow reducers.
//!
//! One reducer per page. Each orchestrates the validation engine, the
//! credential store, and the session manager against user-driven field
//! edits and submit attempts, and owns that page's transient state.

pub mod signin;
pub mod signup;

pub use signin::SignInReducer;
pub use signup::SignUpReducer;
