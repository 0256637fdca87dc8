//! Pinyin fuzzy search.
//!
//! Filters a list of items by a query written in any mix of Chinese
//! characters, full or abbreviated pinyin, and plain Latin text.
//!
//! # Design
//!
//! - The query is split on a separator into tokens. Each token is classified:
//!   all Chinese tokens match character by character; tokens mixing Chinese
//!   and Latin are rewritten to pinyin first; Latin tokens are segmented into
//!   syllable pieces (`zs` → `z s`, `xian` → `xian` | `xi an` | ...).
//! - A candidate matches a token when the token is a substring of its text or
//!   pinyin, or when some segmentation matches its characters in order, gaps
//!   allowed. Polyphonic characters accept any of their readings.
//! - Per-token hits are ranked, then intersected (`All`) or appended (`Any`),
//!   deduplicated by item position.
//!
//! # Example
//!
//! ```
//! use pinsou_search::{SearchEngine, SearchOptions};
//!
//! let engine = SearchEngine::default();
//! let items = ["是张三", "是李四"];
//! let hits = engine.search("zs", &items, &SearchOptions::default());
//! assert_eq!(hits, vec![&"是张三"]);
//! ```

mod config;
mod engine;
mod matcher;
mod query;
mod results;
mod scorer;
mod segmenter;

pub use config::{MultipleMode, SearchOptions, SearchOptionsError, SortMode};
pub use engine::SearchEngine;
pub use matcher::{CONTIGUOUS_RUN, MatchRecord};
pub use query::{Token, TokenKind, tokenize};
pub use results::SearchHit;
pub use segmenter::{Segmentation, Segmenter};

pub use pinsou_core::{IndexConfig, SyllableDictionary};

use std::fmt::Display;
use std::sync::LazyLock;

static DEFAULT_ENGINE: LazyLock<SearchEngine> = LazyLock::new(SearchEngine::default);

/// The process-wide engine over the bundled dictionary.
pub fn default_engine() -> &'static SearchEngine {
    &DEFAULT_ENGINE
}

/// Searches `items` by their `Display` text with the default engine.
pub fn search<'a, T: Display>(query: &str, items: &'a [T], options: &SearchOptions) -> Vec<&'a T> {
    DEFAULT_ENGINE.search(query, items, options)
}

/// Searches `items` by the text `text_provider` extracts, with the default engine.
pub fn search_by<'a, T, F>(
    query: &str,
    items: &'a [T],
    options: &SearchOptions,
    text_provider: F,
) -> Vec<&'a T>
where
    F: Fn(&T) -> String,
{
    DEFAULT_ENGINE.search_by(query, items, options, text_provider)
}

/// Searches with the default engine, reporting matched positions per hit.
pub fn search_with_positions<'a, T: Display>(
    query: &str,
    items: &'a [T],
    options: &SearchOptions,
) -> Vec<SearchHit<'a, T>> {
    DEFAULT_ENGINE.search_with_positions(query, items, options)
}
