use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("invalid syllable: {0:?}")]
    InvalidSyllable(String),

    #[error("syllable {0} lists no characters")]
    EmptyEntry(String),
}
