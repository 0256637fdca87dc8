//! Breaks a Latin query token into syllable pieces.
//!
//! Pinyin syllables vary in length and overlap (`xian` is also `xi an`), so a
//! token generally has several valid partitions. All of them are enumerated;
//! the matcher accepts a candidate if any one matches.

use pinsou_core::SyllablePrefixSet;
use std::fmt;

/// One complete, gapless partition of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segmentation(Vec<String>);

impl Segmentation {
    pub fn pieces(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

pub struct Segmenter<'a> {
    prefixes: &'a SyllablePrefixSet,
}

impl<'a> Segmenter<'a> {
    pub fn new(prefixes: &'a SyllablePrefixSet) -> Self {
        Self { prefixes }
    }

    /// Every partition of `token` into pieces from the prefix set.
    ///
    /// Digits are single-character pieces. Returns an empty list when no
    /// partition exists. Worst case is exponential in the token length; use
    /// [`Segmenter::count`] first when that matters.
    pub fn segment(&self, token: &str) -> Vec<Segmentation> {
        self.enumerate(token, usize::MAX)
    }

    /// The distinct first `n` pieces of every partition of `token`.
    ///
    /// Equal to truncating each [`Segmenter::segment`] result to `n` pieces and
    /// deduplicating, but the search stops at depth `n`, so the cost is bounded
    /// by the prefix set rather than the token length.
    pub fn leading(&self, token: &str, n: usize) -> Vec<Segmentation> {
        self.enumerate(token, n.max(1))
    }

    /// Number of partitions [`Segmenter::segment`] would return, saturating at
    /// `usize::MAX`. Linear in the token length.
    pub fn count(&self, token: &str) -> usize {
        let chars: Vec<char> = token.to_lowercase().chars().collect();
        if chars.is_empty() {
            return 0;
        }

        let mut ways = vec![0usize; chars.len() + 1];
        ways[chars.len()] = 1;
        for start in (0..chars.len()).rev() {
            let total = self
                .steps(&chars, start)
                .fold(0usize, |acc, len| acc.saturating_add(ways[start + len]));
            ways[start] = total;
        }
        ways[0]
    }

    fn enumerate(&self, token: &str, depth: usize) -> Vec<Segmentation> {
        let chars: Vec<char> = token.to_lowercase().chars().collect();
        let mut results = Vec::new();
        if chars.is_empty() {
            return results;
        }

        let completable = self.completable(&chars);
        if !completable[0] {
            return results;
        }

        let mut path = Vec::new();
        self.segment_from(&chars, 0, depth, &completable, &mut path, &mut results);
        results
    }

    fn segment_from(
        &self,
        chars: &[char],
        start: usize,
        depth: usize,
        completable: &[bool],
        path: &mut Vec<String>,
        results: &mut Vec<Segmentation>,
    ) {
        if start == chars.len() || path.len() == depth {
            results.push(Segmentation(path.clone()));
            return;
        }

        for len in self.steps(chars, start) {
            if completable[start + len] {
                path.push(chars[start..start + len].iter().collect());
                self.segment_from(chars, start + len, depth, completable, path, results);
                path.pop();
            }
        }
    }

    /// `completable[i]` is true when `chars[i..]` has at least one partition.
    fn completable(&self, chars: &[char]) -> Vec<bool> {
        let mut completable = vec![false; chars.len() + 1];
        completable[chars.len()] = true;
        for start in (0..chars.len()).rev() {
            let reachable = self.steps(chars, start).any(|len| completable[start + len]);
            completable[start] = reachable;
        }
        completable
    }

    /// Lengths of the pieces that can start at `start`. A digit is always a
    /// piece of its own.
    fn steps<'c>(&'c self, chars: &'c [char], start: usize) -> impl Iterator<Item = usize> + 'c {
        let longest = if chars[start].is_ascii_digit() {
            1
        } else {
            self.prefixes.max_len().min(chars.len() - start)
        };
        (1..=longest).filter(move |&len| {
            let piece: String = chars[start..start + len].iter().collect();
            self.prefixes.contains(&piece)
        })
    }
}
