//! Orders one token's match records.

use crate::config::SortMode;
use crate::matcher::{Candidate, MatchRecord};
use std::cmp::Ordering;

/// Sorts `records` in place. `candidates` is indexed by `MatchRecord::index`.
///
/// `Raw` leaves the order alone; the orchestrator restores input order at the
/// end.
pub fn rank(records: &mut [MatchRecord], candidates: &[Candidate], token: &str, sort: SortMode) {
    let text = |record: &MatchRecord| candidates[record.index].text.as_str();

    match sort {
        SortMode::Raw => {}
        SortMode::Ascending => records.sort_by(|a, b| text(a).cmp(text(b))),
        SortMode::Descending => records.sort_by(|a, b| text(b).cmp(text(a))),
        SortMode::Auto => {
            // Edit distance is the last tiebreak; compute it once per record.
            let mut keyed: Vec<(usize, MatchRecord)> = records
                .iter()
                .map(|record| (strsim::levenshtein(token, text(record)), record.clone()))
                .collect();
            keyed.sort_by(|(da, a), (db, b)| auto_order(a, b, text(a), text(b)).then(da.cmp(db)));
            for (slot, (_, record)) in records.iter_mut().zip(keyed) {
                *slot = record;
            }
        }
    }
}

/// Longer run, then earlier first match, then text, then shorter text.
fn auto_order(a: &MatchRecord, b: &MatchRecord, text_a: &str, text_b: &str) -> Ordering {
    b.run
        .cmp(&a.run)
        .then(a.first_position.cmp(&b.first_position))
        .then_with(|| text_a.cmp(text_b))
        .then_with(|| text_a.chars().count().cmp(&text_b.chars().count()))
}
