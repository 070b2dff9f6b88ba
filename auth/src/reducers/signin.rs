//! Sign-in flow reducer.
//!
//! # Flow
//!
//! 1. User edits fields; errors clear as they type, blur re-checks
//! 2. Submit validates everything; a dirty form never reaches the store
//! 3. A clean form flips `loading` and returns one future: sleep the
//!    simulated latency, match credentials, persist the session
//! 4. The success/failure event re-enters the reducer and settles the page
//!
//! # Security
//!
//! A failed credential match surfaces one generic banner, never a
//! field-specific error, so the flow does not disclose whether an email is
//! registered. The `loading` guard rejects overlapping submits at the
//! reducer level — the contract does not rely on the UI disabling its
//! button.

use crate::actions::SignInAction;
use crate::environment::AuthEnvironment;
use crate::providers::{StoragePort, UserDirectory};
use crate::state::{Field, SignInState};
use crate::validation::signin;
use nexus_core::effect::Effect;
use nexus_core::reducer::Reducer;
use nexus_core::{SmallVec, smallvec};

/// Sign-in flow reducer.
#[derive(Debug, Clone)]
pub struct SignInReducer<D, P> {
    /// Phantom data to hold the provider type parameters.
    _phantom: std::marker::PhantomData<(D, P)>,
}

impl<D, P> SignInReducer<D, P> {
    /// Create a new sign-in reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<D, P> Default for SignInReducer<D, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, P> Reducer for SignInReducer<D, P>
where
    D: UserDirectory + Clone + Send + Sync + 'static,
    P: StoragePort + Clone + Send + Sync + 'static,
{
    type State = SignInState;
    type Action = SignInAction;
    type Environment = AuthEnvironment<D, P>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Field edits: update and clear stale feedback
            // ═══════════════════════════════════════════════════════════
            SignInAction::EmailChanged(value) => {
                state.email = value;
                state.errors.remove(&Field::Email);
                state.auth_error = None;
                smallvec![Effect::None]
            }

            SignInAction::PasswordChanged(value) => {
                state.password = value;
                state.errors.remove(&Field::Password);
                state.auth_error = None;
                smallvec![Effect::None]
            }

            SignInAction::RememberChanged(remember) => {
                state.remember = remember;
                smallvec![Effect::None]
            }

            SignInAction::FillDemoAccount { email, password } => {
                state.email = email;
                state.password = password;
                state.errors.clear();
                state.auth_error = None;
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════
            // Blur: surface this field's problem, if any
            // ═══════════════════════════════════════════════════════════
            SignInAction::FieldBlurred(field) => {
                if let Some(message) =
                    signin::validate_field(field.name(), &state.email, &state.password)
                {
                    state.errors.insert(field, message);
                }
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════
            // Submit: validate, then one async credential check
            // ═══════════════════════════════════════════════════════════
            SignInAction::SubmitTapped => {
                if state.loading {
                    tracing::warn!("sign-in submit ignored: already in flight");
                    return smallvec![Effect::None];
                }

                state.auth_error = None;
                let errors = signin::validate_all(&state.email, &state.password);
                if !errors.is_empty() {
                    state.errors = errors;
                    return smallvec![Effect::None];
                }

                state.loading = true;

                let directory = env.directory.clone();
                let sessions = env.sessions.clone();
                let latency = env.latency;
                let email = state.email.clone();
                let password = state.password.clone();
                let remember = state.remember;

                smallvec![Effect::future(async move {
                    tokio::time::sleep(latency).await;

                    let Some(user) = directory.find_by_credentials(&email, &password) else {
                        return Some(SignInAction::SignInFailed {
                            error: crate::AuthError::CredentialMismatch,
                        });
                    };

                    match sessions.sign_in(&user, remember) {
                        Ok(session) => Some(SignInAction::SignInSucceeded { session }),
                        Err(error) => Some(SignInAction::SignInFailed { error }),
                    }
                })]
            }

            // ═══════════════════════════════════════════════════════════
            // Submit outcomes
            // ═══════════════════════════════════════════════════════════
            SignInAction::SignInSucceeded { session } => {
                state.loading = false;
                tracing::info!(email = %session.email, role = %session.role, "signed in");
                state.session = Some(session);
                smallvec![Effect::None]
            }

            SignInAction::SignInFailed { error } => {
                state.loading = false;
                if error.is_user_error() {
                    tracing::debug!("sign-in rejected: credential mismatch");
                    state.auth_error = Some(error.to_string());
                } else {
                    tracing::error!(error = %error, "sign-in failed");
                }
                smallvec![Effect::None]
            }
        }
    }
}
