//! Sinhala → Roman transliteration engine.
//!
//! Applies the expanded mapping tables in two ordered passes: conjuncts
//! (consonant + vowel-sign combinations) first, then standalone specials
//! over the partially transliterated text. Each pass is a single
//! left-to-right scan taking the longest matching key at every position,
//! which preserves the longest-key-first substitution semantics without
//! re-sorting or rescanning.
//!
//! The engine never fails. Characters matched by no rule pass through
//! unchanged, including Sinhala glyphs outside the rule set; this is a
//! known limitation of the fixed mapping, not an error condition.

use super::table::{RomanizationTable, SubstitutionTable};

/// Script-shaping artifact with no phonetic value; stripped before any
/// substitution.
const ZERO_WIDTH_JOINER: char = '\u{200D}';

impl RomanizationTable {
    /// Converts Sinhala-script text to its Romanized phonetic form.
    ///
    /// Deterministic, and idempotent on already-Romanized text: rule keys
    /// are Sinhala-range glyphs, so a second pass over pure-Roman output
    /// returns it unchanged.
    pub fn transliterate(&self, text: &str) -> String {
        let stripped: String = text.chars().filter(|c| *c != ZERO_WIDTH_JOINER).collect();
        let conjoined = apply_pass(&self.conjuncts, &stripped);
        apply_pass(&self.specials, &conjoined)
    }
}

/// Single left-to-right substitution pass over `text`.
fn apply_pass(table: &SubstitutionTable, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some((roman, matched)) = table.longest_match(rest) {
            out.push_str(roman);
            rest = &rest[matched..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RomanizationTable {
        RomanizationTable::new()
    }

    #[test]
    fn test_bare_consonant_gets_inherent_vowel() {
        assert_eq!(table().transliterate("ක"), "ka");
    }

    #[test]
    fn test_longest_match_precedence() {
        // Conjunct must win over bare consonant + stray vowel sign.
        assert_eq!(table().transliterate("කා"), "kā");
    }

    #[test]
    fn test_virama_conjunct() {
        assert_eq!(table().transliterate("ක්"), "k");
    }

    #[test]
    fn test_specials_direct_mapping() {
        assert_eq!(table().transliterate("ඓ"), "ai");
    }

    #[test]
    fn test_word_transliteration() {
        assert_eq!(table().transliterate("ආයුබෝවන්"), "āyubōvan");
        assert_eq!(table().transliterate("සිංහල"), "siṁhala");
    }

    #[test]
    fn test_pass_through_non_sinhala() {
        assert_eq!(table().transliterate("Hello 123!"), "Hello 123!");
    }

    #[test]
    fn test_mixed_text_preserves_ascii() {
        assert_eq!(table().transliterate("TTS: සිංහල!"), "TTS: siṁhala!");
    }

    #[test]
    fn test_zero_width_joiner_stripped() {
        assert_eq!(
            table().transliterate("ක\u{200D}"),
            table().transliterate("ක")
        );
    }

    #[test]
    fn test_determinism() {
        let t = table();
        let input = "ශ්‍රී ලංකා";
        assert_eq!(t.transliterate(input), t.transliterate(input));
    }

    #[test]
    fn test_idempotent_on_roman_output() {
        let t = table();
        let once = t.transliterate("ආයුබෝවන් ඔබට");
        assert!(!once.chars().any(|c| ('\u{0D80}'..='\u{0DFF}').contains(&c)));
        assert_eq!(t.transliterate(&once), once);
    }

    #[test]
    fn test_unmapped_sinhala_glyph_passes_through() {
        // U+0DE6 (Sinhala lith digit zero) has no rule; it must survive
        // literally rather than raise.
        assert_eq!(table().transliterate("\u{0DE6}"), "\u{0DE6}");
    }
}
