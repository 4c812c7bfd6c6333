//! Post title and content validation

use super::ValidationError;

/// Maximum length for post titles
const MAX_TITLE_LEN: usize = 256;

/// Maximum length for post content
const MAX_CONTENT_LEN: usize = 16_384;

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new post title, rejecting empty or overlong input.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        // Character count, not bytes, to match the VARCHAR(256) column
        if s.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated post content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Create new post content, rejecting empty or overlong input.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        if s.chars().count() > MAX_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_CONTENT_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_posts() {
        assert!(PostTitle::new("Hello world").is_ok());
        assert!(PostContent::new("First post.").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            PostTitle::new("").unwrap_err(),
            ValidationError::Empty { field: "title" }
        ));
        assert!(matches!(
            PostContent::new("").unwrap_err(),
            ValidationError::Empty { field: "content" }
        ));
    }

    #[test]
    fn title_max_length() {
        let ok = "t".repeat(256);
        assert!(PostTitle::new(&ok).is_ok());

        let too_long = "t".repeat(257);
        let err = PostTitle::new(&too_long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 256, .. }));
    }

    #[test]
    fn content_max_length() {
        let too_long = "c".repeat(16_385);
        let err = PostContent::new(&too_long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 16_384, .. }));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // 256 two-byte characters: 512 bytes, but fits the column
        let title = "é".repeat(256);
        assert!(PostTitle::new(&title).is_ok());

        let too_long = "é".repeat(257);
        let err = PostTitle::new(&too_long).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 256, .. }));
    }
}
