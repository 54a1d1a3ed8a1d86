//! Username derivation.

/// Maximum number of last-name characters carried into a username.
pub const USERNAME_SURNAME_CHARS: usize = 3;

/// Derives a username from an employee's names.
///
/// Both names are lower-cased. The result is the first character of the first
/// name, an underscore, then up to [`USERNAME_SURNAME_CHARS`] leading
/// characters of the last name. A last name shorter than that is used whole.
/// Characters are counted as Unicode scalar values.
///
/// Uniqueness is not guaranteed here; the directory rejects collisions.
///
/// # Examples
///
/// ```
/// use employee_portal::credentials::derive_username;
///
/// assert_eq!(derive_username("John", "Doe"), "j_doe");
/// assert_eq!(derive_username("ada", "lovelace"), "a_lov");
/// assert_eq!(derive_username("al", "li"), "a_li");
/// ```
pub fn derive_username(first_name: &str, last_name: &str) -> String {
    let first_name = first_name.to_lowercase();
    let last_name = last_name.to_lowercase();

    let initial: String = first_name.chars().take(1).collect();
    let surname: String = last_name.chars().take(USERNAME_SURNAME_CHARS).collect();

    format!("{}_{}", initial, surname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_letter_last_name() {
        assert_eq!(derive_username("john", "doe"), "j_doe");
    }

    #[test]
    fn test_long_last_name_truncated_to_three() {
        assert_eq!(derive_username("grace", "hopper"), "g_hop");
    }

    #[test]
    fn test_short_last_name_taken_whole() {
        assert_eq!(derive_username("al", "li"), "a_li");
    }

    /// The fallback slice is bounded by the last name, never the first name.
    #[test]
    fn test_short_last_name_with_long_first_name() {
        assert_eq!(derive_username("bartholomew", "o"), "b_o");
    }

    #[test]
    fn test_mixed_case_is_lowered() {
        assert_eq!(derive_username("JOHN", "DoE"), "j_doe");
    }

    #[test]
    fn test_non_ascii_names_slice_on_chars() {
        assert_eq!(derive_username("Élodie", "Müller"), "é_mül");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(
            derive_username("maria", "garcia"),
            derive_username("maria", "garcia")
        );
    }
}
