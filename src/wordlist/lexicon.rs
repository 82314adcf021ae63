use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::ops::Bound;
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Result, WordSearchError};
use crate::wordlist::index::Index;

/// The dictionary: unique, uppercase, non-empty words in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeSet<String>,
}

/// How words are picked out of each line of a word list file.
///
/// The default format takes the first whitespace-delimited token of every line
/// and ignores whatever follows it.
#[derive(TypedBuilder, new, Debug, Clone, Default)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let column = self.word_column.unwrap_or(0);
        let word = match self.delimiter {
            None => line.split_whitespace().nth(column),
            Some(delimiter) => line.split(delimiter).nth(column).map(str::trim),
        };
        word.filter(|w| !w.is_empty())
    }
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Default::default()
    }

    pub fn from_words<I, S>(words: I) -> Lexicon
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        let mut lexicon = Lexicon::new();
        words.into_iter().for_each(|w| lexicon.add(w.as_ref()));
        lexicon
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Lexicon> {
        let path = path.as_ref();
        let unreadable = |source: io::Error| WordSearchError::UnreadableSource { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(unreadable)?;
        let lexicon = Lexicon::from_reader(BufReader::new(file), format).map_err(unreadable)?;
        info!(path = %path.display(), words = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> io::Result<Lexicon> {
        let start = Instant::now();
        let mut lexicon = Lexicon::new();
        let mut skipped: usize = 0;

        for line in reader.split(b'\n') {
            let line = line?;
            // undecodable bytes become U+FFFD
            match format.parse_line(&String::from_utf8_lossy(&line)) {
                Some(word) => lexicon.add(word),
                None => skipped += 1,
            }
        }

        debug!("Read {} words in {:.3}s ({} lines skipped)",
              lexicon.len(), start.elapsed().as_secs_f64(), skipped);
        if lexicon.is_empty() {
            warn!("Lexicon source contained no words");
        }
        Ok(lexicon)
    }

    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> btree_set::Iter<'_, String>;
        }
    }
}

impl Index for Lexicon {
    fn add(&mut self, word: &str) {
        let word = normalize(word);
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The smallest stored word not less than `prefix` carries the prefix iff any word does.
    fn has_prefix(&self, prefix: &str) -> bool {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .map_or(false, |ceiling| ceiling.starts_with(prefix))
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
