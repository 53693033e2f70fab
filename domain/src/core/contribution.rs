//! Contribution value object and its length limits

use super::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Character-count bounds for a contribution (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLimits {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl ContributionLimits {
    pub const DEFAULT_MIN_CHARS: usize = 3;
    pub const DEFAULT_MAX_CHARS: usize = 200;

    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        Self {
            min_chars,
            max_chars,
        }
    }

    /// Validate text against these limits.
    ///
    /// Blank text is rejected before the length is looked at, so `"  "`
    /// reports [`ValidationError::EmptyText`] rather than a length error.
    /// Length is measured on the untrimmed text, in characters.
    pub fn check(&self, text: &str) -> Result<(), ValidationError> {
        if text.chars().all(is_blank) {
            return Err(ValidationError::EmptyText);
        }

        let len = text.chars().count();
        if len < self.min_chars || len > self.max_chars {
            return Err(ValidationError::LengthOutOfRange {
                len,
                min: self.min_chars,
                max: self.max_chars,
            });
        }

        Ok(())
    }
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which `char::is_whitespace` leaves out.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Default for ContributionLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_CHARS, Self::DEFAULT_MAX_CHARS)
    }
}

/// A validated contribution text (Value Object)
///
/// The text is stored exactly as submitted; surrounding blanks are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contribution {
    text: String,
}

impl Contribution {
    /// Validate `text` and wrap it
    pub fn try_new(
        text: impl Into<String>,
        limits: &ContributionLimits,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        limits.check(&text)?;
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Contribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ContributionLimits {
        ContributionLimits::default()
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(defaults().check("e!!").is_ok());
        assert!(defaults().check(&"x".repeat(200)).is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(defaults().check(""), Err(ValidationError::EmptyText));
        assert_eq!(defaults().check(" "), Err(ValidationError::EmptyText));
        assert_eq!(defaults().check("\t\n  "), Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_rejects_ascii_separators_as_blank() {
        assert_eq!(
            defaults().check("\u{1c}\u{1d}\u{1f}"),
            Err(ValidationError::EmptyText)
        );
        assert_eq!(
            defaults().check(" \u{1e}\t"),
            Err(ValidationError::EmptyText)
        );
        // A separator next to visible text is just another character.
        assert!(defaults().check("a\u{1f}b").is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            defaults().check("e!"),
            Err(ValidationError::LengthOutOfRange {
                len: 2,
                min: 3,
                max: 200
            })
        );
        assert!(matches!(
            defaults().check(&"x".repeat(201)),
            Err(ValidationError::LengthOutOfRange { len: 201, .. })
        ));
    }

    #[test]
    fn test_length_counts_untrimmed_characters() {
        // Two visible chars plus padding reach the minimum.
        assert!(defaults().check(" a ").is_ok());
        // Multi-byte characters count once each.
        assert!(defaults().check("ééé").is_ok());
        assert!(defaults().check("éé").is_err());
    }

    #[test]
    fn test_custom_limits() {
        let limits = ContributionLimits::new(1, 5);
        assert!(limits.check("a").is_ok());
        assert!(limits.check("abcdef").is_err());
    }

    #[test]
    fn test_contribution_keeps_text_verbatim() {
        let c = Contribution::try_new("  padded  ", &defaults()).unwrap();
        assert_eq!(c.text(), "  padded  ");
        assert_eq!(c.to_string(), "  padded  ");
        assert_eq!(c.into_text(), "  padded  ");
    }
}
