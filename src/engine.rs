use std::collections::BTreeSet;
use std::path::Path;

use crate::alphabet::normalize;
use crate::board::Board;
use crate::error::{Result, WordSearchError};
use crate::score::score_words;
use crate::search::{Enumerator, PathFinder, SearchConfig};
use crate::wordlist::{FileFormat, Index, Lexicon};

/// The operations a word-search game offers its callers.
///
/// Every lexicon-dependent query fails with `NotReady` until a lexicon has been loaded.
pub trait WordSearchGame {
    /// Replaces the lexicon with the words read from `path`.
    fn load_lexicon(&mut self, path: &Path) -> Result<()>;

    fn is_valid_word(&self, word: &str) -> Result<bool>;

    /// True iff some lexicon word starts with `prefix`.
    fn is_valid_prefix(&self, prefix: &str) -> Result<bool>;

    /// Replaces the board with `tokens` in row-major order; the count must be a perfect square.
    fn set_board(&mut self, tokens: &[&str]) -> Result<()>;

    /// The board's tokens concatenated in row-major order.
    fn board(&self) -> String;

    /// Row-major indices of a path spelling `word`, empty if there is none.
    /// The word itself need not be in the lexicon.
    fn is_on_board(&self, word: &str) -> Result<Vec<usize>>;

    /// Every lexicon word of at least `minimum_length` characters found on the board, sorted.
    fn all_valid_words(&self, minimum_length: usize) -> Result<BTreeSet<String>>;

    fn score_for_words(&self, words: &BTreeSet<String>, minimum_length: usize) -> Result<i64>;
}

#[derive(Debug, Default)]
pub struct GameEngine {
    lexicon: Option<Lexicon>,
    board: Board,
    format: FileFormat,
}

/// A ready engine on the default board, with no lexicon loaded.
pub fn create_game() -> GameEngine {
    GameEngine::new()
}

impl GameEngine {
    pub fn new() -> GameEngine {
        Default::default()
    }

    /// An engine whose [`WordSearchGame::load_lexicon`] reads files in `format`.
    pub fn with_format(format: FileFormat) -> GameEngine {
        GameEngine { format, ..Default::default() }
    }

    pub fn load_lexicon_with(&mut self, path: &Path, format: &FileFormat) -> Result<()> {
        // the previous lexicon is gone even if this load fails
        self.lexicon = None;
        self.lexicon = Some(Lexicon::from_file(path, format)?);
        Ok(())
    }

    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = Some(lexicon);
    }

    pub fn lexicon(&self) -> Result<&Lexicon> {
        self.lexicon.as_ref().ok_or(WordSearchError::NotReady)
    }

    pub fn grid(&self) -> &Board {
        &self.board
    }

    fn check_minimum_length(minimum_length: usize) -> Result<SearchConfig> {
        let config = SearchConfig::builder().min_word_len(minimum_length).build();
        config.validate()?;
        Ok(config)
    }
}

impl WordSearchGame for GameEngine {
    fn load_lexicon(&mut self, path: &Path) -> Result<()> {
        let format = self.format.clone();
        self.load_lexicon_with(path, &format)
    }

    fn is_valid_word(&self, word: &str) -> Result<bool> {
        Ok(self.lexicon()?.contains(&normalize(word)))
    }

    fn is_valid_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(self.lexicon()?.has_prefix(&normalize(prefix)))
    }

    fn set_board(&mut self, tokens: &[&str]) -> Result<()> {
        self.board.set_cells(tokens)
    }

    fn board(&self) -> String {
        self.board.render_flat()
    }

    fn is_on_board(&self, word: &str) -> Result<Vec<usize>> {
        self.lexicon()?;
        Ok(PathFinder::new(&self.board).find(word))
    }

    fn all_valid_words(&self, minimum_length: usize) -> Result<BTreeSet<String>> {
        let config = GameEngine::check_minimum_length(minimum_length)?;
        let lexicon = self.lexicon()?;
        Ok(Enumerator::new(&self.board, lexicon, &config).find_all())
    }

    fn score_for_words(&self, words: &BTreeSet<String>, minimum_length: usize) -> Result<i64> {
        GameEngine::check_minimum_length(minimum_length)?;
        self.lexicon()?;
        Ok(score_words(words, minimum_length))
    }
}
