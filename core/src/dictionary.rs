//! Syllable → characters mapping.

use crate::error::DictionaryError;
use crate::types::Syllable;
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN: &str = include_str!("../data/pinyin.txt");

/// Immutable mapping from syllable to the characters read that way.
///
/// Entries keep the order they were added in. A character listed under
/// several syllables is polyphonic, and the first syllable that lists it is
/// its primary reading.
#[derive(Debug, Clone)]
pub struct SyllableDictionary {
    entries: Vec<(Syllable, Vec<char>)>,
    merged: BTreeMap<Syllable, Vec<char>>,
}

/// Create operations.
impl SyllableDictionary {
    /// Parses the line format: `syllable characters...`, `#` comments.
    ///
    /// Fails on the first malformed line.
    pub fn parse(source: &str) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::empty();
        for (idx, line) in source.lines().enumerate() {
            let parsed = parse_line(line).map_err(|reason| DictionaryError::InvalidLine {
                line: idx + 1,
                reason,
            })?;
            if let Some((syllable, chars)) = parsed {
                dictionary.insert(syllable, chars);
            }
        }
        Ok(dictionary)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Builds a dictionary from in-memory `(syllable, characters)` pairs.
    pub fn from_entries<I, S, C>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: IntoIterator<Item = char>,
    {
        let mut dictionary = Self::empty();
        for (raw, chars) in entries {
            let raw = raw.as_ref();
            let syllable = Syllable::try_from(raw)
                .map_err(|_| DictionaryError::InvalidSyllable(raw.to_string()))?;
            let chars: Vec<char> = chars.into_iter().filter(|c| !c.is_whitespace()).collect();
            if chars.is_empty() {
                return Err(DictionaryError::EmptyEntry(syllable.to_string()));
            }
            dictionary.insert(syllable, chars);
        }
        Ok(dictionary)
    }

    /// The dictionary compiled into the crate.
    ///
    /// Malformed lines are skipped with a warning rather than failing.
    pub fn builtin() -> Self {
        let mut dictionary = Self::empty();
        for (idx, line) in BUILTIN.lines().enumerate() {
            match parse_line(line) {
                Ok(Some((syllable, chars))) => dictionary.insert(syllable, chars),
                Ok(None) => {}
                Err(reason) => log::warn!("skipping bundled dictionary line {}: {}", idx + 1, reason),
            }
        }
        dictionary
    }

    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            merged: BTreeMap::new(),
        }
    }

    fn insert(&mut self, syllable: Syllable, chars: Vec<char>) {
        let merged = self.merged.entry(syllable.clone()).or_default();
        for &ch in &chars {
            if !merged.contains(&ch) {
                merged.push(ch);
            }
        }
        self.entries.push((syllable, chars));
    }
}

impl Default for SyllableDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lookup operations.
impl SyllableDictionary {
    /// Characters read as `syllable`, across every line that lists it.
    pub fn characters(&self, syllable: &str) -> Option<&[char]> {
        let syllable = Syllable::try_from(syllable).ok()?;
        self.merged.get(&syllable).map(Vec::as_slice)
    }

    /// Distinct syllables in alphabetical order.
    pub fn syllables(&self) -> impl Iterator<Item = &Syllable> + '_ {
        self.merged.keys()
    }

    /// Entries in insertion order, one per source line.
    pub fn entries(&self) -> impl Iterator<Item = (&Syllable, &[char])> + '_ {
        self.entries
            .iter()
            .map(|(syllable, chars)| (syllable, chars.as_slice()))
    }

    /// Number of distinct syllables.
    pub fn len(&self) -> usize {
        self.merged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

fn parse_line(line: &str) -> Result<Option<(Syllable, Vec<char>)>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (raw, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let syllable =
        Syllable::try_from(raw).map_err(|_| format!("invalid syllable {:?}", raw))?;
    let chars: Vec<char> = rest.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(format!("syllable {} lists no characters", syllable));
    }

    Ok(Some((syllable, chars)))
}
