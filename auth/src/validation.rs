//! Field validation engine.
//!
//! Pure, deterministic, total: every entry point takes a field *name*
//! and the sibling form values, and returns either the first failing
//! rule's message or nothing. Unknown field names validate clean rather
//! than erroring, so callers can wire inputs without defensive matching.
//!
//! Each field's checks are an ordered rule chain — the order is part of
//! the contract, because it decides which single message the user sees.

use crate::providers::UserDirectory;
use crate::state::{Field, SignUpForm, ValidationErrors};
use regex::Regex;

// ═══════════════════════════════════════════════════════════════════════
// Shared predicates
// ═══════════════════════════════════════════════════════════════════════

/// RFC-light email shape: `local@domain.tld`, no whitespace or extra `@`.
pub(crate) fn is_valid_email(value: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(value))
}

/// Letters, spaces, hyphens and apostrophes; 2–50 characters.
pub(crate) fn is_valid_name(value: &str) -> bool {
    Regex::new(r"^[a-zA-Z '-]{2,50}$").is_ok_and(|re| re.is_match(value))
}

pub(crate) fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_special(value: &str) -> bool {
    Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#).is_ok_and(|re| re.is_match(value))
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

// ═══════════════════════════════════════════════════════════════════════
// Sign-in rule set
// ═══════════════════════════════════════════════════════════════════════

/// Sign-in validation: email and password only, with the relaxed
/// password rule (existing accounts predate the sign-up policy).
pub mod signin {
    use super::{Field, ValidationErrors, char_count, is_valid_email};

    /// Validate one sign-in field by name.
    ///
    /// Unknown names — including sign-up-only fields — yield `None`.
    #[must_use]
    pub fn validate_field(field: &str, email: &str, password: &str) -> Option<String> {
        match Field::from_name(field)? {
            Field::Email => {
                if email.is_empty() {
                    Some("Email is required.".to_string())
                } else if !is_valid_email(email) {
                    Some("Enter a valid email address.".to_string())
                } else {
                    None
                }
            }
            Field::Password => {
                if password.is_empty() {
                    Some("Password is required.".to_string())
                } else if char_count(password) < 6 {
                    Some("Password must be at least 6 characters.".to_string())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Validate the whole sign-in form; only failing fields appear in the
    /// result.
    #[must_use]
    pub fn validate_all(email: &str, password: &str) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in [Field::Email, Field::Password] {
            if let Some(message) = validate_field(field.name(), email, password) {
                errors.insert(field, message);
            }
        }
        errors
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Sign-up rule set
// ═══════════════════════════════════════════════════════════════════════

/// Sign-up validation: the full field table, including the directory-backed
/// email-uniqueness check and the strict password policy.
pub mod signup {
    use super::{
        Field, SignUpForm, UserDirectory, ValidationErrors, char_count, has_digit, has_lowercase,
        has_special, has_uppercase, is_valid_email, is_valid_name,
    };

    /// Validate one sign-up field by name against the current form values.
    ///
    /// The email rule consults the directory for uniqueness (on the
    /// trimmed value) — the rules themselves stay stateless; the caller
    /// injects the store. Unknown names yield `None`.
    #[must_use]
    pub fn validate_field<D>(field: &str, form: &SignUpForm, directory: &D) -> Option<String>
    where
        D: UserDirectory + ?Sized,
    {
        match Field::from_name(field)? {
            Field::FirstName => name_error(&form.first_name, "First name is required."),
            Field::LastName => name_error(&form.last_name, "Last name is required."),
            Field::Email => {
                if form.email.trim().is_empty() {
                    Some("Email address is required.".to_string())
                } else if !is_valid_email(&form.email) {
                    Some("Enter a valid email address.".to_string())
                } else if directory.is_email_taken(form.email.trim()) {
                    Some("This email is already registered. Sign in instead.".to_string())
                } else {
                    None
                }
            }
            Field::Password => password_error(&form.password),
            Field::ConfirmPassword => {
                if form.confirm_password.is_empty() {
                    Some("Please confirm your password.".to_string())
                } else if form.confirm_password != form.password {
                    Some("Passwords do not match.".to_string())
                } else {
                    None
                }
            }
            Field::Terms => {
                if form.terms {
                    None
                } else {
                    Some("You must accept the terms to continue.".to_string())
                }
            }
        }
    }

    /// Validate the whole sign-up form; only failing fields appear in the
    /// result.
    #[must_use]
    pub fn validate_all<D>(form: &SignUpForm, directory: &D) -> ValidationErrors
    where
        D: UserDirectory + ?Sized,
    {
        let mut errors = ValidationErrors::new();
        for field in Field::ALL {
            if let Some(message) = validate_field(field.name(), form, directory) {
                errors.insert(field, message);
            }
        }
        errors
    }

    /// Per-rule pass/fail for the live password checklist.
    ///
    /// Unlike [`validate_field`], which reports only the first failing
    /// rule, this reports every rule independently so the form can render
    /// the full checklist.
    #[must_use]
    pub fn password_checklist(password: &str) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", char_count(password) >= 8),
            ("One uppercase letter", has_uppercase(password)),
            ("One lowercase letter", has_lowercase(password)),
            ("One number", has_digit(password)),
            ("One special character", has_special(password)),
        ]
    }

    fn name_error(value: &str, required_message: &str) -> Option<String> {
        if value.trim().is_empty() {
            Some(required_message.to_string())
        } else if !is_valid_name(value) {
            Some("Only letters, spaces, hyphens and apostrophes allowed.".to_string())
        } else if char_count(value.trim()) < 2 {
            Some("Must be at least 2 characters.".to_string())
        } else {
            None
        }
    }

    fn password_error(password: &str) -> Option<String> {
        if password.is_empty() {
            Some("Password is required.".to_string())
        } else if char_count(password) < 8 {
            Some("Must be at least 8 characters.".to_string())
        } else if !has_uppercase(password) {
            Some("Must include at least one uppercase letter.".to_string())
        } else if !has_lowercase(password) {
            Some("Must include at least one lowercase letter.".to_string())
        } else if !has_digit(password) {
            Some("Must include at least one number.".to_string())
        } else if !has_special(password) {
            Some("Must include at least one special character (!@#$…).".to_string())
        } else {
            None
        }
    }
}
