//! CLI walkthrough of the full identity flow.
//!
//! Plays the parts the browser shell would: the route guard checks for an
//! active session, the "pages" drive their reducers through a Store, and
//! the dashboard reads the session snapshot before signing out.

use anyhow::Result;
use nexus_auth::{
    AuthEnvironment, Field, SignInAction, SignInState, SignUpAction, SignUpState,
    constants::{DEMO_ACCOUNTS, latency},
    reducers::{SignInReducer, SignUpReducer},
    session::SessionManager,
    stores::{InMemoryDirectory, InMemoryStorage},
};
use nexus_core::environment::SystemClock;
use nexus_runtime::Store;
use std::sync::Arc;

/// Route-guard check: render the dashboard if a session is present.
fn dashboard(sessions: &SessionManager<InMemoryStorage>) -> Result<bool> {
    match sessions.active_session()? {
        Some(session) => {
            println!("  ┌─ Dashboard ─────────────────────────────");
            println!("  │ [{}] {}", session.avatar_initials, session.display_name);
            println!("  │ {} · {}", session.email, session.role);
            println!("  │ signed in at {}", session.login_time.format("%H:%M:%S"));
            println!("  └─────────────────────────────────────────");
            Ok(true)
        }
        None => {
            println!("  (no session — redirecting to sign-in)");
            Ok(false)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Nexus identity flow ===\n");

    // Shared infrastructure: one directory, one tiered storage
    let directory = InMemoryDirectory::with_seed_users();
    let storage = InMemoryStorage::new();
    let sessions = SessionManager::new(storage.clone(), Arc::new(SystemClock));

    // Route guard before anyone signs in
    println!("Visiting /dashboard…");
    dashboard(&sessions)?;

    // ── Sign-in page: demo chip + remember me ───────────────────────────
    let signin_env = AuthEnvironment::new(directory.clone(), sessions.clone(), latency::SIGN_IN);
    let signin = Store::new(SignInState::default(), SignInReducer::new(), signin_env);

    let admin_chip = DEMO_ACCOUNTS[0];
    println!("\nSigning in with the {} demo account (remember me)…", admin_chip.label);
    signin
        .send(SignInAction::FillDemoAccount {
            email: admin_chip.email.to_string(),
            password: admin_chip.password.to_string(),
        })
        .await;
    signin.send(SignInAction::RememberChanged(true)).await;
    signin.send(SignInAction::SubmitTapped).await;

    println!("Visiting /dashboard…");
    dashboard(&sessions)?;

    // Durable sessions outlive a restart
    println!("\nSimulating a restart…");
    storage.simulate_restart();
    println!("Visiting /dashboard…");
    dashboard(&sessions)?;

    println!("\nSigning out…");
    sessions.sign_out()?;
    dashboard(&sessions)?;

    // ── Sign-in page: the mismatch banner ───────────────────────────────
    println!("\nTrying a wrong password…");
    signin
        .send(SignInAction::EmailChanged(admin_chip.email.to_string()))
        .await;
    signin
        .send(SignInAction::PasswordChanged("nope".to_string()))
        .await;
    signin.send(SignInAction::SubmitTapped).await;
    if let Some(banner) = signin.state(|s| s.auth_error.clone()).await {
        println!("  ⚠ {banner} Try a demo account below.");
    }

    // ── Sign-up page: register + auto-login ─────────────────────────────
    let signup_env = AuthEnvironment::new(directory.clone(), sessions.clone(), latency::SIGN_UP);
    let signup = Store::new(SignUpState::default(), SignUpReducer::new(), signup_env);

    println!("\nCreating an account for Jane Smith…");
    for (field, value) in [
        (Field::FirstName, "Jane"),
        (Field::LastName, "Smith"),
        (Field::Email, "jane@smith.io"),
        (Field::Password, "Str0ng!Pass"),
        (Field::ConfirmPassword, "Str0ng!Pass"),
    ] {
        signup
            .send(SignUpAction::TextChanged {
                field,
                value: value.to_string(),
            })
            .await;
    }
    signup.send(SignUpAction::TermsToggled(true)).await;
    signup.send(SignUpAction::SubmitTapped).await;

    println!("Visiting /dashboard…");
    dashboard(&sessions)?;

    // Auto-login is ephemeral: a restart logs Jane out
    println!("\nSimulating a restart…");
    storage.simulate_restart();
    println!("Visiting /dashboard…");
    dashboard(&sessions)?;

    println!("\nDone.");
    Ok(())
}
