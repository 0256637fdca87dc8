use nutype::nutype;

/// A Latin syllable such as `shi` or `zhuang`.
///
/// Input is trimmed and lowercased; anything other than ASCII letters is
/// rejected. `ü` is spelled `v` (`lv`, `nve`).
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, predicate = |s| s.bytes().all(|b| b.is_ascii_lowercase())),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Syllable(String);

impl Syllable {
    /// First letter, used as the abbreviated form (`z` for `zhang`).
    pub fn initial(&self) -> char {
        // Validation guarantees at least one ASCII letter.
        self.as_str().chars().next().unwrap_or('a')
    }
}

#[cfg(test)]
mod tests;
