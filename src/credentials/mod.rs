//! Credential policy for employee accounts.
//!
//! This module derives usernames from employee names and generates and
//! validates passwords against the strength policy (length range plus at least
//! one uppercase letter, one lowercase letter and one digit).

mod password;
mod username;

pub use password::{
    CredentialPolicy, DEFAULT_MAX_GENERATION_ATTEMPTS, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
    MAX_PASSWORD_LENGTH, PASSWORD_ALPHABET, verify_match,
};
pub use username::{USERNAME_SURNAME_CHARS, derive_username};
