//! Character → syllable index derived from a [`SyllableDictionary`].

use crate::dictionary::SyllableDictionary;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Index build settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Multi-letter initials accepted as standalone query pieces, e.g.
    /// `["zh", "ch", "sh"]`. Empty by default, so `shs` only reads as `s h s`.
    pub initial_clusters: Vec<String>,
}

/// Per-character readings of a text: one slot per character.
pub type Transliteration = Vec<Vec<String>>;

/// Every string that may stand alone as one piece of a segmented query.
#[derive(Debug, Clone)]
pub struct SyllablePrefixSet {
    pieces: HashSet<String>,
    max_len: usize,
}

impl SyllablePrefixSet {
    fn build(dictionary: &SyllableDictionary, config: &IndexConfig) -> Self {
        let mut pieces = HashSet::new();

        for syllable in dictionary.syllables() {
            pieces.insert(syllable.to_string());
            pieces.insert(syllable.initial().to_string());
        }
        for cluster in &config.initial_clusters {
            let cluster = cluster.trim().to_lowercase();
            if !cluster.is_empty() {
                pieces.insert(cluster);
            }
        }
        for digit in '0'..='9' {
            pieces.insert(digit.to_string());
        }

        let max_len = pieces.iter().map(|p| p.chars().count()).max().unwrap_or(1);
        Self { pieces, max_len }
    }

    pub fn contains(&self, piece: &str) -> bool {
        self.pieces.contains(piece)
    }

    /// Length in characters of the longest piece.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Character → readings, primary reading first.
#[derive(Debug, Clone)]
pub struct TransliterationIndex {
    readings: HashMap<char, Vec<String>>,
    prefixes: SyllablePrefixSet,
}

impl TransliterationIndex {
    /// One scan over the dictionary entries in insertion order.
    pub fn build(dictionary: &SyllableDictionary, config: &IndexConfig) -> Self {
        let mut readings: HashMap<char, Vec<String>> = HashMap::new();
        for (syllable, chars) in dictionary.entries() {
            for &ch in chars {
                let list = readings.entry(ch).or_default();
                if !list.iter().any(|s| s == syllable.as_str()) {
                    list.push(syllable.to_string());
                }
            }
        }

        let prefixes = SyllablePrefixSet::build(dictionary, config);
        log::debug!(
            "built transliteration index: {} characters, {} syllables, {} pieces",
            readings.len(),
            dictionary.len(),
            prefixes.len()
        );

        Self { readings, prefixes }
    }

    /// All readings of `ch`; empty when the character is not in the dictionary.
    pub fn syllables_of(&self, ch: char) -> &[String] {
        self.readings.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn primary(&self, ch: char) -> Option<&str> {
        self.syllables_of(ch).first().map(String::as_str)
    }

    /// Unknown characters (digits, Latin letters, punctuation) pass through
    /// lowercased as their own single reading.
    pub fn transliterate(&self, text: &str) -> Transliteration {
        text.chars()
            .map(|ch| match self.readings.get(&ch) {
                Some(list) => list.clone(),
                None => vec![ch.to_lowercase().collect()],
            })
            .collect()
    }

    pub fn prefixes(&self) -> &SyllablePrefixSet {
        &self.prefixes
    }

    /// Number of indexed characters.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
