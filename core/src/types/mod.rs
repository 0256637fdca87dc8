pub(crate) mod syllable;
pub use syllable::{Syllable, SyllableError};
