//! The one-time welcome notice issued when an account is created.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials handed to a newly created employee.
///
/// This is the only place the generated password is ever surfaced in clear
/// text. `Debug` output redacts it so the notice can be traced safely.
///
/// # Example
///
/// ```
/// use employee_portal::models::WelcomeNotice;
///
/// let notice = WelcomeNotice {
///     first_name: "John".to_string(),
///     username: "j_doe".to_string(),
///     password: "Xk3vTq9Lm".to_string(),
/// };
/// assert_eq!(
///     notice.to_string(),
///     "Welcome John! Your login info is below:\nUsername: j_doe\nDefault password: Xk3vTq9Lm"
/// );
/// assert!(!format!("{:?}", notice).contains("Xk3vTq9Lm"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeNotice {
    /// The employee's title-cased first name.
    pub first_name: String,
    /// The derived username.
    pub username: String,
    /// The generated password, in clear text.
    pub password: String,
}

impl fmt::Display for WelcomeNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome {}! Your login info is below:", self.first_name)?;
        writeln!(f, "Username: {}", self.username)?;
        write!(f, "Default password: {}", self.password)
    }
}

impl fmt::Debug for WelcomeNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WelcomeNotice")
            .field("first_name", &self.first_name)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}
