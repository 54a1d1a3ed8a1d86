//! Password generation and strength validation.

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{PortalError, PortalResult};

/// Characters a generated password is drawn from.
pub const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Shortest password the default policy accepts.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Longest password the default policy accepts.
pub const DEFAULT_MAX_LENGTH: usize = 16;

/// Number of candidates sampled before generation gives up.
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 10_000;

/// Upper limit any policy may set for `max_length`.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// The password strength policy.
///
/// A password is strong when its length (in characters) lies within
/// `[min_length, max_length]` and it contains at least one ASCII uppercase
/// letter, one ASCII lowercase letter and one ASCII digit. Characters outside
/// those classes are ignored rather than rejected.
///
/// # Example
///
/// ```
/// use employee_portal::credentials::CredentialPolicy;
///
/// let policy = CredentialPolicy::default();
/// assert!(policy.validate_strength("Passw0rd"));
/// assert!(!policy.validate_strength("password"));
///
/// let generated = policy.generate_password().unwrap();
/// assert!(policy.validate_strength(&generated));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    min_length: usize,
    max_length: usize,
    max_generation_attempts: u32,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            max_generation_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl CredentialPolicy {
    /// Creates a policy with custom bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `min_length` is below 3 (no room for the
    /// three required character classes), if `min_length > max_length`, if
    /// `max_length` exceeds [`MAX_PASSWORD_LENGTH`], or if
    /// `max_generation_attempts` is zero.
    pub fn new(
        min_length: usize,
        max_length: usize,
        max_generation_attempts: u32,
    ) -> PortalResult<Self> {
        if min_length < 3 {
            return Err(PortalError::InvalidConfig {
                message: format!("password min_length must be at least 3, got {}", min_length),
            });
        }
        if min_length > max_length {
            return Err(PortalError::InvalidConfig {
                message: format!(
                    "password min_length ({}) exceeds max_length ({})",
                    min_length, max_length
                ),
            });
        }
        if max_length > MAX_PASSWORD_LENGTH {
            return Err(PortalError::InvalidConfig {
                message: format!(
                    "password max_length must be at most {}, got {}",
                    MAX_PASSWORD_LENGTH, max_length
                ),
            });
        }
        if max_generation_attempts == 0 {
            return Err(PortalError::InvalidConfig {
                message: "max_generation_attempts must be at least 1".to_string(),
            });
        }

        Ok(Self {
            min_length,
            max_length,
            max_generation_attempts,
        })
    }

    /// Returns the shortest accepted password length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns the longest accepted password length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the generation attempt cap.
    pub fn max_generation_attempts(&self) -> u32 {
        self.max_generation_attempts
    }

    /// Derives a username from an employee's names.
    ///
    /// See [`derive_username`](super::derive_username).
    pub fn derive_username(&self, first_name: &str, last_name: &str) -> String {
        super::derive_username(first_name, last_name)
    }

    /// Describes the policy for error messages and prompts.
    pub fn requirements(&self) -> String {
        format!(
            "it must contain {}-{} characters, at least an uppercase letter, a lowercase letter, and a number",
            self.min_length, self.max_length
        )
    }

    /// Returns true if the password satisfies the strength policy.
    pub fn validate_strength(&self, password: &str) -> bool {
        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        let mut has_upper = false;
        let mut has_lower = false;
        let mut has_digit = false;

        for c in password.chars() {
            if c.is_ascii_uppercase() {
                has_upper = true;
            } else if c.is_ascii_lowercase() {
                has_lower = true;
            } else if c.is_ascii_digit() {
                has_digit = true;
            }

            if has_upper && has_lower && has_digit {
                return true;
            }
        }

        false
    }

    /// Generates a random password that satisfies the policy.
    ///
    /// Uses the thread-local random number generator.
    pub fn generate_password(&self) -> PortalResult<String> {
        self.generate_password_with_rng(&mut rand::thread_rng())
    }

    /// Generates a password from the given random source.
    ///
    /// Candidates of a uniformly chosen length in `[min_length, max_length]`
    /// are drawn from [`PASSWORD_ALPHABET`] until one passes
    /// [`validate_strength`](Self::validate_strength).
    ///
    /// # Errors
    ///
    /// Returns `Policy` if no candidate passes within
    /// `max_generation_attempts` samples.
    pub fn generate_password_with_rng<R: Rng>(&self, rng: &mut R) -> PortalResult<String> {
        for attempt in 1..=self.max_generation_attempts {
            let length = rng.gen_range(self.min_length..=self.max_length);
            let candidate: String = (0..length)
                .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
                .collect();

            if self.validate_strength(&candidate) {
                debug!(attempt, length, "Generated password");
                return Ok(candidate);
            }
        }

        warn!(
            attempts = self.max_generation_attempts,
            "Password generation exhausted its attempt budget"
        );
        Err(PortalError::Policy {
            attempts: self.max_generation_attempts,
        })
    }
}

/// Returns true if the candidate is exactly the stored password.
pub fn verify_match(candidate: &str, stored: &str) -> bool {
    candidate == stored
}
