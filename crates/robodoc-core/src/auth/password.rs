//! Password strength rule shared by sign-up and credential changes.

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// At least [`MIN_PASSWORD_LENGTH`] UTF-16 code units and one character
/// that is not an ASCII letter or digit.
pub fn is_strong_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}
