//! Query orchestration: tokenize, route, match, rank, combine.

use crate::config::{MultipleMode, SearchOptions, SortMode};
use crate::matcher::{self, Candidate, MatchRecord};
use crate::query::{Token, TokenKind, tokenize};
use crate::results::SearchHit;
use crate::scorer;
use crate::segmenter::{Segmentation, Segmenter};
use pinsou_core::{IndexConfig, SyllableDictionary, TransliterationIndex};
use std::fmt::Display;
use std::sync::OnceLock;

/// Pinyin-aware fuzzy search over caller-owned item lists.
///
/// The transliteration index is built on first search and reused for the
/// lifetime of the engine. Engines share nothing with each other.
pub struct SearchEngine {
    dictionary: SyllableDictionary,
    config: IndexConfig,
    index: OnceLock<TransliterationIndex>,
}

/// Create operations.
impl SearchEngine {
    pub fn new(dictionary: SyllableDictionary) -> Self {
        Self::with_config(dictionary, IndexConfig::default())
    }

    pub fn with_config(dictionary: SyllableDictionary, config: IndexConfig) -> Self {
        Self {
            dictionary,
            config,
            index: OnceLock::new(),
        }
    }

    pub fn dictionary(&self) -> &SyllableDictionary {
        &self.dictionary
    }

    /// The transliteration index, built on first access.
    pub fn index(&self) -> &TransliterationIndex {
        self.index
            .get_or_init(|| TransliterationIndex::build(&self.dictionary, &self.config))
    }
}

impl Default for SearchEngine {
    /// Engine over the bundled dictionary.
    fn default() -> Self {
        Self::new(SyllableDictionary::builtin())
    }
}

/// Search operations.
impl SearchEngine {
    /// Searches items by their `Display` text.
    pub fn search<'a, T: Display>(
        &self,
        query: &str,
        items: &'a [T],
        options: &SearchOptions,
    ) -> Vec<&'a T> {
        self.search_by(query, items, options, |item| item.to_string())
    }

    /// Searches items by the text `text_provider` returns for each.
    pub fn search_by<'a, T, F>(
        &self,
        query: &str,
        items: &'a [T],
        options: &SearchOptions,
        text_provider: F,
    ) -> Vec<&'a T>
    where
        F: Fn(&T) -> String,
    {
        self.run(query, items, options, text_provider)
            .into_iter()
            .map(|record| &items[record.index])
            .collect()
    }

    /// Like [`search`](Self::search), also reporting matched positions.
    pub fn search_with_positions<'a, T: Display>(
        &self,
        query: &str,
        items: &'a [T],
        options: &SearchOptions,
    ) -> Vec<SearchHit<'a, T>> {
        self.search_with_positions_by(query, items, options, |item| item.to_string())
    }

    pub fn search_with_positions_by<'a, T, F>(
        &self,
        query: &str,
        items: &'a [T],
        options: &SearchOptions,
        text_provider: F,
    ) -> Vec<SearchHit<'a, T>>
    where
        F: Fn(&T) -> String,
    {
        self.run(query, items, options, text_provider)
            .into_iter()
            .map(|record| SearchHit {
                item: &items[record.index],
                index: record.index,
                positions: record.positions,
            })
            .collect()
    }

    fn run<T, F>(
        &self,
        query: &str,
        items: &[T],
        options: &SearchOptions,
        text_provider: F,
    ) -> Vec<MatchRecord>
    where
        F: Fn(&T) -> String,
    {
        let tokens = tokenize(query, &options.separator);
        if tokens.is_empty() || items.is_empty() {
            return Vec::new();
        }

        let index = self.index();
        let candidates: Vec<Candidate> = items
            .iter()
            .enumerate()
            .map(|(i, item)| Candidate::new(i, text_provider(item), index))
            .collect();

        let mut accumulated: Option<Vec<MatchRecord>> = None;
        for token in &tokens {
            let mut records = self.match_token(token, &candidates, options);
            scorer::rank(&mut records, &candidates, &token.text, options.sort);
            log::trace!("token {:?} ({:?}): {} hits", token.text, token.kind, records.len());

            let combined = match accumulated {
                None => records,
                Some(acc) => combine(acc, records, options.multiple, candidates.len()),
            };
            let exhausted = combined.is_empty() && options.multiple == MultipleMode::All;
            accumulated = Some(combined);
            if exhausted {
                break;
            }
        }

        let mut results = dedupe(accumulated.unwrap_or_default(), candidates.len());
        if options.sort == SortMode::Raw {
            results.sort_by_key(|record| record.index);
        }

        log::debug!(
            "query {:?}: {} tokens, {} of {} items matched",
            query,
            tokens.len(),
            results.len(),
            items.len()
        );
        results
    }

    fn match_token(
        &self,
        token: &Token,
        candidates: &[Candidate],
        options: &SearchOptions,
    ) -> Vec<MatchRecord> {
        let latin = match token.kind {
            TokenKind::Chinese => {
                let chars: Vec<char> = token.text.chars().collect();
                return candidates
                    .iter()
                    .filter_map(|candidate| {
                        matcher::fast_path(candidate, &token.text, false)
                            .or_else(|| matcher::match_characters(candidate, &chars, options.strict))
                    })
                    .collect();
            }
            TokenKind::Mixed => token.to_latin(self.index()),
            TokenKind::Latin => token.text.to_lowercase(),
        };

        let mut records = Vec::new();
        let mut pool = Vec::new();
        for candidate in candidates {
            match matcher::fast_path(candidate, &latin, true) {
                Some(record) => records.push(record),
                None => pool.push(candidate),
            }
        }

        if !pool.is_empty() {
            self.match_pool(&latin, pool, options, &mut records);
        }

        records.sort_by_key(|record| record.index);
        records
    }

    /// General path over the candidates the fast path left. Partitions are
    /// counted before any are built; when count × pool exceeds the threshold,
    /// the pool is narrowed on leading pieces first and the full enumeration
    /// only runs if something survives.
    fn match_pool(
        &self,
        latin: &str,
        mut pool: Vec<&Candidate>,
        options: &SearchOptions,
        records: &mut Vec<MatchRecord>,
    ) {
        let segmenter = Segmenter::new(self.index().prefixes());
        let ways = segmenter.count(latin);
        log::trace!("token {:?} segments into {} ways", latin, ways);
        if ways == 0 {
            return;
        }

        if ways.saturating_mul(pool.len()) > options.prefilter_threshold {
            let before = pool.len();
            let leading = segmenter.leading(latin, options.prefilter_pieces);
            pool.retain(|candidate| {
                leading
                    .iter()
                    .any(|s| matcher::match_readings(candidate, s.pieces(), false).is_some())
            });
            log::debug!(
                "pre-filter on {} leading segmentations narrowed {} candidates to {}",
                leading.len(),
                before,
                pool.len()
            );
            if pool.is_empty() {
                return;
            }
        }

        let segmentations = segmenter.segment(latin);
        for candidate in pool {
            if let Some(record) = best_match(candidate, &segmentations, options.strict) {
                records.push(record);
            }
        }
    }
}

fn best_match(
    candidate: &Candidate,
    segmentations: &[Segmentation],
    strict: bool,
) -> Option<MatchRecord> {
    let mut best: Option<MatchRecord> = None;
    for segmentation in segmentations {
        if let Some(record) = matcher::match_readings(candidate, segmentation.pieces(), strict) {
            if best.as_ref().is_none_or(|b| record.is_better_than(b)) {
                best = Some(record);
            }
        }
    }
    best
}

/// `All` keeps accumulated records the new token also hit, in accumulated
/// order, folding in the new positions. `Any` appends.
fn combine(
    mut accumulated: Vec<MatchRecord>,
    records: Vec<MatchRecord>,
    multiple: MultipleMode,
    candidate_count: usize,
) -> Vec<MatchRecord> {
    match multiple {
        MultipleMode::Any => {
            accumulated.extend(records);
            accumulated
        }
        MultipleMode::All => {
            let mut hits: Vec<Option<MatchRecord>> = vec![None; candidate_count];
            for record in records {
                let index = record.index;
                hits[index] = Some(record);
            }
            accumulated
                .into_iter()
                .filter_map(|mut record| {
                    let hit = hits[record.index].as_ref()?;
                    merge_positions(&mut record.positions, &hit.positions);
                    Some(record)
                })
                .collect()
        }
    }
}

/// Keeps the first record per candidate, merging later records' positions
/// into it.
fn dedupe(records: Vec<MatchRecord>, candidate_count: usize) -> Vec<MatchRecord> {
    let mut slot_of: Vec<Option<usize>> = vec![None; candidate_count];
    let mut unique: Vec<MatchRecord> = Vec::with_capacity(records.len());
    for record in records {
        match slot_of[record.index] {
            Some(slot) => merge_positions(&mut unique[slot].positions, &record.positions),
            None => {
                slot_of[record.index] = Some(unique.len());
                unique.push(record);
            }
        }
    }
    unique
}

fn merge_positions(into: &mut Vec<usize>, from: &[usize]) {
    into.extend_from_slice(from);
    into.sort_unstable();
    into.dedup();
}
