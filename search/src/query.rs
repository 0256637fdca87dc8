//! Query tokenization.

use pinsou_core::TransliterationIndex;

/// What a token is made of, which decides how it is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Only Chinese characters; matched character by character.
    Chinese,
    /// Chinese characters mixed with Latin letters or digits.
    Mixed,
    /// No Chinese characters.
    Latin,
}

/// One separator-delimited, trimmed fragment of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }

    /// Latin form of the token: Chinese characters become their primary
    /// reading, everything else is lowercased.
    pub fn to_latin(&self, index: &TransliterationIndex) -> String {
        let mut latin = String::with_capacity(self.text.len());
        for ch in self.text.chars() {
            match index.primary(ch) {
                Some(syllable) if is_cjk(ch) => latin.push_str(syllable),
                _ => latin.extend(ch.to_lowercase()),
            }
        }
        latin
    }
}

/// Splits on `separator`, trims each fragment and drops empty ones.
pub fn tokenize(query: &str, separator: &str) -> Vec<Token> {
    if separator.is_empty() {
        let query = query.trim();
        return if query.is_empty() {
            Vec::new()
        } else {
            vec![Token::new(query)]
        };
    }

    query
        .split(separator)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(Token::new)
        .collect()
}

pub fn classify(text: &str) -> TokenKind {
    let cjk = text.chars().filter(|&ch| is_cjk(ch)).count();
    if cjk == 0 {
        TokenKind::Latin
    } else if cjk == text.chars().count() {
        TokenKind::Chinese
    } else {
        TokenKind::Mixed
    }
}

/// CJK Unified Ideographs and Extension A.
pub fn is_cjk(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}
