//! Static transliteration rule families.
//!
//! Three disjoint families drive the Sinhala → Roman conversion:
//! base consonants, dependent vowel-sign combinators, and standalone
//! specials (independent vowels, anusvara, visarga). The consonant ×
//! vowel-sign cross product is expanded at table-build time; see
//! [`super::table`].

/// A base consonant glyph and its Roman form.
#[derive(Debug, Clone, Copy)]
pub struct ConsonantRule {
    pub glyph: &'static str,
    pub roman: &'static str,
}

/// A dependent vowel-sign combinator.
///
/// `sign` is the vowel-sign glyph appended to a consonant (empty for the
/// inherent "a"), `prefix`/`suffix` wrap the consonant's Roman form. The
/// virama entry has an empty suffix: consonant + virama yields the bare
/// consonant sound.
#[derive(Debug, Clone, Copy)]
pub struct VowelSignRule {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub sign: &'static str,
}

/// A standalone sign with a direct Roman equivalent.
#[derive(Debug, Clone, Copy)]
pub struct SpecialRule {
    pub glyph: &'static str,
    pub roman: &'static str,
}

/// Base consonants, digraph forms first.
pub const CONSONANTS: &[ConsonantRule] = &[
    ConsonantRule { glyph: "ඛ", roman: "kh" },
    ConsonantRule { glyph: "ඨ", roman: "ṭh" },
    ConsonantRule { glyph: "ඝ", roman: "gh" },
    ConsonantRule { glyph: "ඡ", roman: "ch" },
    ConsonantRule { glyph: "ඣ", roman: "jh" },
    ConsonantRule { glyph: "ඦ", roman: "ñj" },
    ConsonantRule { glyph: "ඪ", roman: "ḍh" },
    ConsonantRule { glyph: "ඬ", roman: "ṇḍ" },
    ConsonantRule { glyph: "ථ", roman: "th" },
    ConsonantRule { glyph: "ධ", roman: "dh" },
    ConsonantRule { glyph: "ඵ", roman: "ph" },
    ConsonantRule { glyph: "භ", roman: "bh" },
    ConsonantRule { glyph: "ඹ", roman: "mb" },
    ConsonantRule { glyph: "ඳ", roman: "ṉd" },
    ConsonantRule { glyph: "ඟ", roman: "ṉg" },
    ConsonantRule { glyph: "ඥ", roman: "gn" },
    ConsonantRule { glyph: "ක", roman: "k" },
    ConsonantRule { glyph: "ග", roman: "g" },
    ConsonantRule { glyph: "ච", roman: "c" },
    ConsonantRule { glyph: "ජ", roman: "j" },
    ConsonantRule { glyph: "ඤ", roman: "ñ" },
    ConsonantRule { glyph: "ට", roman: "ṭ" },
    ConsonantRule { glyph: "ඩ", roman: "ḍ" },
    ConsonantRule { glyph: "ණ", roman: "ṇ" },
    ConsonantRule { glyph: "ත", roman: "t" },
    ConsonantRule { glyph: "ද", roman: "d" },
    ConsonantRule { glyph: "න", roman: "n" },
    ConsonantRule { glyph: "ප", roman: "p" },
    ConsonantRule { glyph: "බ", roman: "b" },
    ConsonantRule { glyph: "ම", roman: "m" },
    ConsonantRule { glyph: "ය", roman: "y" },
    ConsonantRule { glyph: "ර", roman: "r" },
    ConsonantRule { glyph: "ල", roman: "l" },
    ConsonantRule { glyph: "ව", roman: "v" },
    ConsonantRule { glyph: "ශ", roman: "ś" },
    ConsonantRule { glyph: "ෂ", roman: "ş" },
    ConsonantRule { glyph: "ස", roman: "s" },
    ConsonantRule { glyph: "හ", roman: "h" },
    ConsonantRule { glyph: "ළ", roman: "ḷ" },
    ConsonantRule { glyph: "ෆ", roman: "f" },
];

/// Dependent vowel-sign combinators, including the virama (consonant
/// killer) and the inherent "a" (empty sign).
pub const VOWEL_SIGNS: &[VowelSignRule] = &[
    VowelSignRule { prefix: "", suffix: "", sign: "\u{0DCA}" }, // ්
    VowelSignRule { prefix: "", suffix: "a", sign: "" },
    VowelSignRule { prefix: "", suffix: "ā", sign: "ා" },
    VowelSignRule { prefix: "", suffix: "æ", sign: "ැ" },
    VowelSignRule { prefix: "", suffix: "ǣ", sign: "ෑ" },
    VowelSignRule { prefix: "", suffix: "i", sign: "ි" },
    VowelSignRule { prefix: "", suffix: "ī", sign: "ී" },
    VowelSignRule { prefix: "", suffix: "u", sign: "ු" },
    VowelSignRule { prefix: "", suffix: "ū", sign: "ූ" },
    VowelSignRule { prefix: "", suffix: "e", sign: "ෙ" },
    VowelSignRule { prefix: "", suffix: "ē", sign: "ේ" },
    VowelSignRule { prefix: "", suffix: "ai", sign: "ෛ" },
    VowelSignRule { prefix: "", suffix: "o", sign: "ො" },
    VowelSignRule { prefix: "", suffix: "ō", sign: "ෝ" },
    VowelSignRule { prefix: "", suffix: "ṛ", sign: "ෘ" },
    VowelSignRule { prefix: "", suffix: "ṝ", sign: "ෲ" },
    VowelSignRule { prefix: "", suffix: "au", sign: "ෞ" },
    VowelSignRule { prefix: "", suffix: "ḹ", sign: "ෳ" },
];

/// Standalone vowels, anusvara, visarga and similar signs.
///
/// Where the source romanization scheme listed alternative Roman forms
/// for the same glyph, only the first form is kept; later alternatives
/// were unreachable under longest-key-first substitution.
pub const SPECIALS: &[SpecialRule] = &[
    SpecialRule { glyph: "ඓ", roman: "ai" },
    SpecialRule { glyph: "ඖ", roman: "au" },
    SpecialRule { glyph: "ඍ", roman: "ṛ" },
    SpecialRule { glyph: "ඎ", roman: "ṝ" },
    SpecialRule { glyph: "ඐ", roman: "ḹ" },
    SpecialRule { glyph: "අ", roman: "a" },
    SpecialRule { glyph: "ආ", roman: "ā" },
    SpecialRule { glyph: "ඇ", roman: "æ" },
    SpecialRule { glyph: "ඈ", roman: "ǣ" },
    SpecialRule { glyph: "ඉ", roman: "i" },
    SpecialRule { glyph: "ඊ", roman: "ī" },
    SpecialRule { glyph: "උ", roman: "u" },
    SpecialRule { glyph: "ඌ", roman: "ū" },
    SpecialRule { glyph: "එ", roman: "e" },
    SpecialRule { glyph: "ඒ", roman: "ē" },
    SpecialRule { glyph: "ඔ", roman: "o" },
    SpecialRule { glyph: "ඕ", roman: "ō" },
    SpecialRule { glyph: "ඞ\u{0DCA}", roman: "ṅ" }, // ඞ් (kantaja nasikyaya + virama)
    SpecialRule { glyph: "ං", roman: "ṁ" },
    SpecialRule { glyph: "ඃ", roman: "ḥ" },
];
