//! Shared constants for the identity flows.

use std::time::Duration;

/// Storage key under which the serialized session record lives, in
/// whichever persistence tier is active.
pub const SESSION_STORAGE_KEY: &str = "__session__";

/// Default simulated network latencies.
///
/// Placeholders for a real asynchronous call — an opaque suspension point,
/// not a timing contract. Tests inject `Duration::ZERO` instead.
pub mod latency {
    use super::Duration;

    /// Sign-in submit latency.
    pub const SIGN_IN: Duration = Duration::from_millis(900);

    /// Sign-up submit latency.
    pub const SIGN_UP: Duration = Duration::from_millis(800);
}

/// A demo credential chip shown on the sign-in page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    /// Chip label.
    pub label: &'static str,
    /// Seeded email.
    pub email: &'static str,
    /// Seeded password.
    pub password: &'static str,
}

/// The fixed demo credential chips, matching the seeded directory.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        label: "Admin",
        email: "admin@example.com",
        password: "Admin@123",
    },
    DemoAccount {
        label: "User",
        email: "user@example.com",
        password: "User@1234",
    },
    DemoAccount {
        label: "Guest",
        email: "demo@example.com",
        password: "Demo@1234",
    },
];
