//! Username validation

use super::ValidationError;

/// Maximum length for usernames, matches the column width in migrations
const MAX_USERNAME_LEN: usize = 64;

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username, rejecting empty or overlong input.
    ///
    /// Uniqueness is a database concern, not a validation concern;
    /// duplicates are caught by the unique constraint on insert.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }

        // Character count, not bytes, to match the VARCHAR(64) column
        if s.chars().count() > MAX_USERNAME_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(Username::new("alice").is_ok());
        assert!(Username::new("bob_42").is_ok());
        assert!(Username::new("a").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = Username::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        let name_64 = "a".repeat(64);
        assert!(Username::new(&name_64).is_ok());

        let name_65 = "a".repeat(65);
        let err = Username::new(&name_65).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 64, .. }));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 64 two-byte characters: 128 bytes, but fits the column
        let name = "ü".repeat(64);
        assert!(Username::new(&name).is_ok());

        let too_long = "ü".repeat(65);
        let err = Username::new(&too_long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 64, .. }));
    }
}
