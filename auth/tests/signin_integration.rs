//! Integration tests for the sign-in flow, driven through the Store.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use nexus_auth::{
    AuthEnvironment, Field, PersistenceTier, Role, SignInAction, SignInState,
    reducers::SignInReducer,
    session::SessionManager,
    stores::{InMemoryDirectory, InMemoryStorage},
};
use nexus_core::environment::SystemClock;
use nexus_runtime::Store;
use std::sync::Arc;
use std::time::Duration;

type SignInStore = Store<
    SignInState,
    SignInAction,
    AuthEnvironment<InMemoryDirectory, InMemoryStorage>,
    SignInReducer<InMemoryDirectory, InMemoryStorage>,
>;

/// Create a store over fresh storage, returning both for inspection.
fn create_store() -> (SignInStore, InMemoryStorage, SessionManager<InMemoryStorage>) {
    let storage = InMemoryStorage::new();
    let sessions = SessionManager::new(storage.clone(), Arc::new(SystemClock));
    let env = AuthEnvironment::new(
        InMemoryDirectory::with_seed_users(),
        sessions.clone(),
        Duration::ZERO,
    );
    let store = Store::new(SignInState::default(), SignInReducer::new(), env);
    (store, storage, sessions)
}

async fn submit(store: &SignInStore, email: &str, password: &str, remember: bool) {
    store
        .send(SignInAction::EmailChanged(email.to_string()))
        .await;
    store
        .send(SignInAction::PasswordChanged(password.to_string()))
        .await;
    store.send(SignInAction::RememberChanged(remember)).await;
    store.send(SignInAction::SubmitTapped).await;
}

#[tokio::test]
async fn admin_sign_in_with_remember_persists_durably() {
    let (store, storage, sessions) = create_store();

    submit(&store, "admin@example.com", "Admin@123", true).await;

    let state = store.state(Clone::clone).await;
    assert!(!state.loading);
    assert_eq!(state.auth_error, None);

    let session = state.session.expect("session should be created");
    assert_eq!(session.email, "admin@example.com");
    assert_eq!(session.role, Role::Administrator);
    assert_eq!(session.display_name, "Admin User");
    assert_eq!(session.avatar_initials, "AU");

    // Durable tier holds the record; ephemeral is clear
    assert_eq!(storage.len(PersistenceTier::Durable), 1);
    assert!(storage.is_empty(PersistenceTier::Ephemeral));

    // The route guard sees the same snapshot
    let active = sessions.active_session().unwrap().unwrap();
    assert_eq!(active, session);
}

#[tokio::test]
async fn wrong_password_yields_generic_banner_and_no_session() {
    let (store, storage, sessions) = create_store();

    submit(&store, "admin@example.com", "wrong!", false).await;

    let state = store.state(Clone::clone).await;
    assert!(!state.loading);
    assert_eq!(
        state.auth_error.as_deref(),
        Some("Incorrect email or password.")
    );
    // No field singled out, no session anywhere
    assert!(state.errors.is_empty());
    assert!(state.session.is_none());
    assert!(storage.is_empty(PersistenceTier::Durable));
    assert!(storage.is_empty(PersistenceTier::Ephemeral));
    assert!(sessions.active_session().unwrap().is_none());
}

#[tokio::test]
async fn unknown_email_is_indistinguishable_from_wrong_password() {
    let (store, _storage, _sessions) = create_store();

    submit(&store, "nobody@example.com", "Admin@123", false).await;

    let state = store.state(Clone::clone).await;
    assert_eq!(
        state.auth_error.as_deref(),
        Some("Incorrect email or password.")
    );
}

#[tokio::test]
async fn ephemeral_session_is_lost_on_restart_durable_survives() {
    let (store, storage, sessions) = create_store();

    submit(&store, "user@example.com", "User@1234", false).await;
    assert!(sessions.active_session().unwrap().is_some());

    storage.simulate_restart();
    assert!(sessions.active_session().unwrap().is_none());

    // Same credentials, remembered this time
    store.send(SignInAction::SubmitTapped).await;
    let state = store.state(Clone::clone).await;
    assert!(state.session.is_some(), "re-submit should succeed: {state:?}");
    // Still ephemeral — restart wipes it again
    storage.simulate_restart();
    assert!(sessions.active_session().unwrap().is_none());

    store.send(SignInAction::RememberChanged(true)).await;
    store.send(SignInAction::SubmitTapped).await;
    storage.simulate_restart();
    let survivor = sessions.active_session().unwrap().unwrap();
    assert_eq!(survivor.email, "user@example.com");
    assert_eq!(survivor.role, Role::Member);
}

#[tokio::test]
async fn switching_tiers_never_leaves_both_occupied() {
    let (store, storage, _sessions) = create_store();

    submit(&store, "demo@example.com", "Demo@1234", true).await;
    store.send(SignInAction::RememberChanged(false)).await;
    store.send(SignInAction::SubmitTapped).await;

    let occupied = usize::from(!storage.is_empty(PersistenceTier::Durable))
        + usize::from(!storage.is_empty(PersistenceTier::Ephemeral));
    assert_eq!(occupied, 1);
    assert!(storage.is_empty(PersistenceTier::Durable));
}

#[tokio::test]
async fn invalid_form_short_circuits_before_the_store() {
    let (store, storage, _sessions) = create_store();

    store
        .send(SignInAction::EmailChanged("not-an-email".to_string()))
        .await;
    store.send(SignInAction::SubmitTapped).await;

    let state = store.state(Clone::clone).await;
    assert!(!state.loading);
    assert_eq!(
        state.errors.get(&Field::Email).map(String::as_str),
        Some("Enter a valid email address.")
    );
    assert_eq!(
        state.errors.get(&Field::Password).map(String::as_str),
        Some("Password is required.")
    );
    assert!(storage.is_empty(PersistenceTier::Durable));
    assert!(storage.is_empty(PersistenceTier::Ephemeral));
}

#[tokio::test]
async fn overlapping_submit_is_ignored_while_in_flight() {
    // Real latency so a second submit can arrive mid-flight.
    let storage = InMemoryStorage::new();
    let env = AuthEnvironment::new(
        InMemoryDirectory::with_seed_users(),
        SessionManager::new(storage.clone(), Arc::new(SystemClock)),
        Duration::from_millis(200),
    );
    let store = Store::new(SignInState::default(), SignInReducer::new(), env);

    store
        .send(SignInAction::EmailChanged("admin@example.com".to_string()))
        .await;
    store
        .send(SignInAction::PasswordChanged("Admin@123".to_string()))
        .await;

    let submitting = store.clone();
    let first = tokio::spawn(async move {
        submitting.send(SignInAction::SubmitTapped).await;
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(store.state(|s| s.loading).await);

    // The guard rejects this one at the reducer, no second credential check
    store.send(SignInAction::SubmitTapped).await;

    first.await.unwrap();
    let state = store.state(Clone::clone).await;
    assert!(!state.loading);
    assert!(state.session.is_some());
    assert_eq!(storage.len(PersistenceTier::Ephemeral), 1);
}

#[tokio::test]
async fn demo_chip_then_submit_signs_in() {
    let (store, _storage, _sessions) = create_store();

    store
        .send(SignInAction::FillDemoAccount {
            email: "demo@example.com".to_string(),
            password: "Demo@1234".to_string(),
        })
        .await;
    store.send(SignInAction::SubmitTapped).await;

    let state = store.state(Clone::clone).await;
    let session = state.session.expect("demo chip credentials should work");
    assert_eq!(session.role, Role::Guest);
}
