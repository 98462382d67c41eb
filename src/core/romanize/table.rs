//! Mapping table builder.
//!
//! Expands the static rule families into the full substitution tables used
//! by the transliteration engine: one table of conjunct mappings (the
//! consonant × vowel-sign cross product) and one table of standalone
//! specials. Built once at startup and never mutated afterwards.

use std::collections::HashMap;

use super::rules::{CONSONANTS, SPECIALS, VOWEL_SIGNS};

/// A single grapheme-to-Roman substitution pair.
#[derive(Debug, Clone)]
struct Mapping {
    key: String,
    roman: String,
}

/// A substitution table supporting longest-match lookup at a position.
///
/// Entries are bucketed by the first character of their Sinhala key, with
/// each bucket ordered longest-key-first. Scanning the buckets in order is
/// therefore equivalent to trying every key sorted by descending length: a
/// shorter key that is a prefix of a longer key can never match first.
#[derive(Debug)]
pub(crate) struct SubstitutionTable {
    buckets: HashMap<char, Vec<Mapping>>,
    len: usize,
}

impl SubstitutionTable {
    /// Builds a table from `(sinhala, roman)` pairs. The first occurrence
    /// of a duplicate key wins.
    fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut buckets: HashMap<char, Vec<Mapping>> = HashMap::new();
        let mut len = 0;

        for (key, roman) in pairs {
            let first = match key.chars().next() {
                Some(c) => c,
                None => continue,
            };
            let bucket = buckets.entry(first).or_default();
            if bucket.iter().any(|m| m.key == key) {
                continue;
            }
            bucket.push(Mapping { key, roman });
            len += 1;
        }

        for bucket in buckets.values_mut() {
            // Stable: equal-length keys keep their rule-table order.
            bucket.sort_by_key(|m| std::cmp::Reverse(m.key.chars().count()));
        }

        Self { buckets, len }
    }

    /// Returns the Roman form and matched byte length for the longest key
    /// matching the start of `rest`, if any.
    pub(crate) fn longest_match(&self, rest: &str) -> Option<(&str, usize)> {
        let first = rest.chars().next()?;
        let bucket = self.buckets.get(&first)?;
        bucket
            .iter()
            .find(|m| rest.starts_with(m.key.as_str()))
            .map(|m| (m.roman.as_str(), m.key.len()))
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

/// The fully expanded grapheme-to-Roman mapping set.
///
/// Holds the two substitution tables applied by the engine in order:
/// conjuncts (consonant + vowel-sign combinations) first, then specials.
#[derive(Debug)]
pub struct RomanizationTable {
    pub(crate) conjuncts: SubstitutionTable,
    pub(crate) specials: SubstitutionTable,
}

impl RomanizationTable {
    /// Expands the rule families into the derived mapping set.
    ///
    /// Deterministic: the same rule tables always yield the same tables
    /// with the same lookup order.
    pub fn new() -> Self {
        let conjuncts = VOWEL_SIGNS.iter().flat_map(|combi| {
            CONSONANTS.iter().map(move |conso| {
                (
                    format!("{}{}", conso.glyph, combi.sign),
                    format!("{}{}{}", combi.prefix, conso.roman, combi.suffix),
                )
            })
        });

        let specials = SPECIALS
            .iter()
            .map(|s| (s.glyph.to_string(), s.roman.to_string()));

        Self {
            conjuncts: SubstitutionTable::from_pairs(conjuncts),
            specials: SubstitutionTable::from_pairs(specials),
        }
    }
}

impl Default for RomanizationTable {
    fn default() -> Self {
        Self::new()
    }
}
