//! Pinyin syllable dictionary and transliteration index.
//!
//! # Design
//!
//! - [`SyllableDictionary`] holds the syllable → characters mapping. It is
//!   immutable once built and keeps line order, so the first syllable that
//!   lists a character is that character's primary reading.
//! - [`TransliterationIndex`] inverts the dictionary into character →
//!   readings and carries the [`SyllablePrefixSet`] used to segment queries.
//! - Nothing here is global: callers own the index and decide when to build it.

mod dictionary;
mod error;
mod index;
pub mod types;

pub use dictionary::SyllableDictionary;
pub use error::DictionaryError;
pub use index::{IndexConfig, SyllablePrefixSet, Transliteration, TransliterationIndex};
pub use types::{Syllable, SyllableError};
