//! Sign-in form validation.

use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    InvalidEmail,
    ShortPassword,
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").ok())
        .as_ref()
}

/// Checks the form before anything is sent to the auth service.
pub fn validate(email: &str, password: &str) -> Result<(), CredentialError> {
    if !email_pattern().is_some_and(|re| re.is_match(email.trim())) {
        return Err(CredentialError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::ShortPassword);
    }
    Ok(())
}
