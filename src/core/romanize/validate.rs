//! Input validation for synthesis requests.
//!
//! Pure classification: text is either accepted or rejected with a definite
//! reason before it reaches the transliteration engine. Never panics and
//! has no side effects.

use thiserror::Error;

/// Why a piece of input text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text is empty or contains only whitespace")]
    Empty,

    #[error("Text contains only whitespace and punctuation")]
    PunctuationOnly,

    #[error("Text contains non-Sinhala characters. Please provide text in Sinhala Unicode.")]
    NonSinhalaUnicode,

    #[error("Text does not contain Sinhala characters. Please provide text in Sinhala Unicode (සිංහල).")]
    NotSinhala,
}

impl ValidationError {
    /// Short machine-readable reason, used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::PunctuationOnly => "punctuation-only",
            ValidationError::NonSinhalaUnicode => "non-sinhala-unicode",
            ValidationError::NotSinhala => "not-sinhala",
        }
    }
}

/// Punctuation ignored when deciding whether text has any substance.
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '-', '(', ')', '[', ']', '"',
];

/// The Unicode code-point range treated as Sinhala script.
#[derive(Debug, Clone, Copy)]
pub struct SinhalaBlock {
    pub lower: u32,
    pub upper: u32,
}

impl Default for SinhalaBlock {
    fn default() -> Self {
        // Sinhala Unicode block: U+0D80..U+0DFF
        Self {
            lower: 0x0D80,
            upper: 0x0DFF,
        }
    }
}

impl SinhalaBlock {
    pub fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        cp >= self.lower && cp <= self.upper
    }
}

/// Gates text before it reaches the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextValidator {
    block: SinhalaBlock,
}

impl TextValidator {
    pub fn new(block: SinhalaBlock) -> Self {
        Self { block }
    }

    /// Classifies `text`, applying the rejection rules in order: empty,
    /// punctuation-only, then Sinhala-content checks. Pure ASCII input is
    /// distinguished from other non-Sinhala scripts for user-facing
    /// messaging.
    pub fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }

        let has_substance = text
            .chars()
            .any(|c| !c.is_whitespace() && !PUNCTUATION.contains(&c));
        if !has_substance {
            return Err(ValidationError::PunctuationOnly);
        }

        if text.chars().any(|c| self.block.contains(c)) {
            return Ok(());
        }

        if text.chars().any(|c| !c.is_ascii()) {
            Err(ValidationError::NonSinhalaUnicode)
        } else {
            Err(ValidationError::NotSinhala)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> TextValidator {
        TextValidator::default()
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(validator().validate(""), Err(ValidationError::Empty));
        assert_eq!(validator().validate("   "), Err(ValidationError::Empty));
        assert_eq!(validator().validate("\n\t"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_punctuation_only_rejected() {
        assert_eq!(
            validator().validate("... !?"),
            Err(ValidationError::PunctuationOnly)
        );
        assert_eq!(
            validator().validate("()[]\"-"),
            Err(ValidationError::PunctuationOnly)
        );
    }

    #[test]
    fn test_pure_ascii_rejected_as_not_sinhala() {
        assert_eq!(
            validator().validate("Hello"),
            Err(ValidationError::NotSinhala)
        );
        assert_eq!(
            validator().validate("Hello, world! 123"),
            Err(ValidationError::NotSinhala)
        );
    }

    #[test]
    fn test_other_scripts_rejected_as_non_sinhala_unicode() {
        assert_eq!(
            validator().validate("こんにちは"),
            Err(ValidationError::NonSinhalaUnicode)
        );
        assert_eq!(
            validator().validate("naïve"),
            Err(ValidationError::NonSinhalaUnicode)
        );
    }

    #[test]
    fn test_sinhala_text_accepted() {
        assert!(validator().validate("ආයුබෝවන්").is_ok());
    }

    #[test]
    fn test_mixed_text_with_sinhala_accepted() {
        assert!(validator().validate("Hello ආයුබෝවන්!").is_ok());
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(ValidationError::Empty.reason(), "empty");
        assert_eq!(ValidationError::PunctuationOnly.reason(), "punctuation-only");
        assert_eq!(
            ValidationError::NonSinhalaUnicode.reason(),
            "non-sinhala-unicode"
        );
        assert_eq!(ValidationError::NotSinhala.reason(), "not-sinhala");
    }

    #[test]
    fn test_custom_block_bounds() {
        // A validator scoped to a different block no longer accepts Sinhala.
        let v = TextValidator::new(SinhalaBlock {
            lower: 0x0900,
            upper: 0x097F,
        });
        assert_eq!(v.validate("සිංහල"), Err(ValidationError::NonSinhalaUnicode));
    }
}
