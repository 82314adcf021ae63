pub mod index;
pub mod lexicon;

pub use index::Index;
pub use lexicon::{FileFormat, Lexicon};
