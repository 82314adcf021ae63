//! Finds words on a letter grid: locate a single word's path, or enumerate every
//! dictionary word the grid can spell.

pub mod alphabet;
pub mod board;
pub mod engine;
pub mod error;
pub mod score;
pub mod search;
pub mod wordlist;

pub use board::Board;
pub use engine::{create_game, GameEngine, WordSearchGame};
pub use error::{ErrorKind, Result, WordSearchError};
pub use wordlist::{FileFormat, Lexicon};
