//! Ordered, gap-tolerant matching of query pieces against candidates.

use pinsou_core::{Transliteration, TransliterationIndex};

/// Run weight given to whole-substring hits; outranks any real run.
pub const CONTIGUOUS_RUN: usize = usize::MAX;

/// A text flattened into one string, remembering where each source
/// character starts so byte offsets map back to character indices.
#[derive(Debug, Clone)]
struct Flattened {
    text: String,
    starts: Vec<usize>,
}

impl Flattened {
    fn new<'s>(parts: impl Iterator<Item = &'s str>) -> Self {
        let mut text = String::new();
        let mut starts = Vec::new();
        for part in parts {
            starts.push(text.len());
            text.push_str(part);
        }
        Self { text, starts }
    }

    /// First occurrence of `needle` that begins on a character boundary,
    /// as the covered character range.
    fn locate(&self, needle: &str) -> Option<(usize, usize)> {
        if needle.is_empty() {
            return None;
        }
        self.text.match_indices(needle).find_map(|(offset, _)| {
            let first = self.starts.binary_search(&offset).ok()?;
            let end = offset + needle.len();
            let last = self.starts.partition_point(|&start| start < end);
            Some((first, last))
        })
    }
}

/// One input item prepared for matching.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Position in the caller's item list.
    pub index: usize,
    /// Text produced by the text provider.
    pub text: String,
    chars: Vec<char>,
    slots: Transliteration,
    lowered: Flattened,
    primary: Flattened,
}

impl Candidate {
    pub fn new(index: usize, text: String, transliteration: &TransliterationIndex) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let slots = transliteration.transliterate(&text);
        let lowered_chars: Vec<String> = chars.iter().map(|c| c.to_lowercase().collect()).collect();
        let lowered = Flattened::new(lowered_chars.iter().map(String::as_str));
        let primary = Flattened::new(slots.iter().map(|readings| {
            readings.first().map(String::as_str).unwrap_or_default()
        }));

        Self {
            index,
            text,
            chars,
            slots,
            lowered,
            primary,
        }
    }

    /// Number of characters, i.e. slots.
    pub fn len(&self) -> usize {
        self.chars.len()
    }
}

/// How one token matched one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub index: usize,
    /// Character index of the first matched piece.
    pub first_position: usize,
    /// Longest run of pieces on adjacent characters, or [`CONTIGUOUS_RUN`].
    pub run: usize,
    /// Matched character indices, ascending.
    pub positions: Vec<usize>,
}

impl MatchRecord {
    fn from_positions(index: usize, positions: Vec<usize>) -> Option<Self> {
        let first_position = *positions.first()?;
        Some(Self {
            index,
            first_position,
            run: longest_run(&positions),
            positions,
        })
    }

    /// Whether `self` ranks ahead of `other` for the same candidate.
    pub fn is_better_than(&self, other: &MatchRecord) -> bool {
        (self.run, std::cmp::Reverse(self.first_position))
            > (other.run, std::cmp::Reverse(other.first_position))
    }
}

/// Whole-substring check on the lowered text and, when `use_readings`, on
/// the concatenated primary readings.
pub fn fast_path(candidate: &Candidate, needle: &str, use_readings: bool) -> Option<MatchRecord> {
    let needle = needle.to_lowercase();
    let (first, last) = candidate.lowered.locate(&needle).or_else(|| {
        if use_readings {
            candidate.primary.locate(&needle)
        } else {
            None
        }
    })?;

    Some(MatchRecord {
        index: candidate.index,
        first_position: first,
        run: CONTIGUOUS_RUN,
        positions: (first..last).collect(),
    })
}

/// Matches pieces against the readings of each slot: a slot takes a piece
/// when any of its readings starts with it.
pub fn match_readings(candidate: &Candidate, pieces: &[String], strict: bool) -> Option<MatchRecord> {
    let positions = scan(candidate.len(), pieces.len(), strict, |slot, piece| {
        candidate.slots[slot]
            .iter()
            .any(|reading| reading.starts_with(pieces[piece].as_str()))
    })?;
    MatchRecord::from_positions(candidate.index, positions)
}

/// Matches characters directly against the candidate's own characters.
pub fn match_characters(candidate: &Candidate, chars: &[char], strict: bool) -> Option<MatchRecord> {
    let positions = scan(candidate.len(), chars.len(), strict, |slot, piece| {
        candidate.chars[slot] == chars[piece]
    })?;
    MatchRecord::from_positions(candidate.index, positions)
}

fn scan(
    slot_count: usize,
    piece_count: usize,
    strict: bool,
    accepts: impl Fn(usize, usize) -> bool,
) -> Option<Vec<usize>> {
    if piece_count == 0 || piece_count > slot_count {
        return None;
    }

    if strict {
        return (0..=slot_count - piece_count)
            .find(|&start| (0..piece_count).all(|piece| accepts(start + piece, piece)))
            .map(|start| (start..start + piece_count).collect());
    }

    let mut positions = Vec::with_capacity(piece_count);
    let mut piece = 0;
    for slot in 0..slot_count {
        if slot_count - slot < piece_count - piece {
            return None;
        }
        if accepts(slot, piece) {
            positions.push(slot);
            piece += 1;
            if piece == piece_count {
                return Some(positions);
            }
        }
    }
    None
}

fn longest_run(positions: &[usize]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<usize> = None;
    for &position in positions {
        current = match previous {
            Some(p) if p + 1 == position => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(position);
    }
    longest
}
