//! Sign-up flow reducer.
//!
//! # Flow
//!
//! 1. Before the first submit attempt, per-field validation fires on blur
//!    only (lazy mode — no noise while typing)
//! 2. The first submit flips the flow to eager mode: from then on every
//!    change revalidates the whole form. The transition is monotonic
//! 3. A clean form registers after the simulated latency; uniqueness is
//!    re-checked authoritatively at commit time, closing the race between
//!    async validation and submit
//! 4. Successful registration auto-logs the new identity in (ephemeral
//!    tier) and settles the page

use crate::actions::SignUpAction;
use crate::environment::AuthEnvironment;
use crate::error::AuthError;
use crate::providers::{StoragePort, UserDirectory};
use crate::state::{Field, NewUser, SignUpState, ValidationMode};
use crate::validation::signup;
use nexus_core::effect::Effect;
use nexus_core::reducer::Reducer;
use nexus_core::{SmallVec, smallvec};

/// Sign-up flow reducer.
#[derive(Debug, Clone)]
pub struct SignUpReducer<D, P> {
    /// Phantom data to hold the provider type parameters.
    _phantom: std::marker::PhantomData<(D, P)>,
}

impl<D, P> SignUpReducer<D, P> {
    /// Create a new sign-up reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<D, P> Default for SignUpReducer<D, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, P> Reducer for SignUpReducer<D, P>
where
    D: UserDirectory + Clone + Send + Sync + 'static,
    P: StoragePort + Clone + Send + Sync + 'static,
{
    type State = SignUpState;
    type Action = SignUpAction;
    type Environment = AuthEnvironment<D, P>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Edits: lazy before first submit, live afterwards
            // ═══════════════════════════════════════════════════════════
            SignUpAction::TextChanged { field, value } => {
                if !state.form.set_text(field, value) {
                    tracing::warn!(%field, "text change ignored: not a text field");
                    return smallvec![Effect::None];
                }
                if state.mode.is_eager() {
                    state.errors = signup::validate_all(&state.form, &env.directory);
                }
                smallvec![Effect::None]
            }

            SignUpAction::TermsToggled(accepted) => {
                state.form.terms = accepted;
                if state.mode.is_eager() {
                    state.errors = signup::validate_all(&state.form, &env.directory);
                }
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════
            // Blur: mark touched, settle this field's error either way
            // ═══════════════════════════════════════════════════════════
            SignUpAction::FieldBlurred(field) => {
                state.touched.insert(field);
                match signup::validate_field(field.name(), &state.form, &env.directory) {
                    Some(message) => {
                        state.errors.insert(field, message);
                    }
                    None => {
                        state.errors.remove(&field);
                    }
                }
                smallvec![Effect::None]
            }

            // ═══════════════════════════════════════════════════════════
            // Submit: go eager, validate, then register + auto-login
            // ═══════════════════════════════════════════════════════════
            SignUpAction::SubmitTapped => {
                if state.loading {
                    tracing::warn!("sign-up submit ignored: already in flight");
                    return smallvec![Effect::None];
                }

                state.mode = ValidationMode::Eager;
                state.errors = signup::validate_all(&state.form, &env.directory);
                if !state.errors.is_empty() {
                    return smallvec![Effect::None];
                }

                state.loading = true;

                let directory = env.directory.clone();
                let sessions = env.sessions.clone();
                let latency = env.latency;
                let new_user = NewUser {
                    first_name: state.form.first_name.clone(),
                    last_name: state.form.last_name.clone(),
                    email: state.form.email.trim().to_string(),
                    password: state.form.password.clone(),
                };

                smallvec![Effect::future(async move {
                    tokio::time::sleep(latency).await;

                    // The directory re-checks uniqueness here; validation
                    // passing a moment ago is not authoritative.
                    let user = match directory.register(new_user) {
                        Ok(user) => user,
                        Err(error) => return Some(SignUpAction::SignUpFailed { error }),
                    };

                    match sessions.sign_in(&user, false) {
                        Ok(session) => Some(SignUpAction::SignUpSucceeded { session }),
                        Err(error) => Some(SignUpAction::SignUpFailed { error }),
                    }
                })]
            }

            // ═══════════════════════════════════════════════════════════
            // Submit outcomes
            // ═══════════════════════════════════════════════════════════
            SignUpAction::SignUpSucceeded { session } => {
                state.loading = false;
                tracing::info!(email = %session.email, "account created and signed in");
                state.session = Some(session);
                smallvec![Effect::None]
            }

            SignUpAction::SignUpFailed { error } => {
                state.loading = false;
                match error {
                    AuthError::EmailTaken => {
                        tracing::debug!("sign-up rejected: email already registered");
                        state.errors.insert(Field::Email, error.to_string());
                    }
                    other => {
                        tracing::error!(error = %other, "sign-up failed");
                    }
                }
                smallvec![Effect::None]
            }
        }
    }
}
