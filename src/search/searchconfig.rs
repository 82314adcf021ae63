use typed_builder::TypedBuilder;

use crate::error::{Result, WordSearchError};

#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest word, in characters, worth reporting.
    #[builder(default = 3)]
    pub min_word_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::builder().build()
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_word_len < 1 {
            return Err(WordSearchError::invalid("minimum word length must be at least 1"));
        }
        Ok(())
    }
}
