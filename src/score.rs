use crate::alphabet::word_len;

/// One point for reaching `minimum_length`, plus one per character beyond it.
///
/// Words are trusted as given: nothing is checked against the lexicon or board, and a word
/// shorter than the minimum scores zero or less.
pub fn score_word(word: &str, minimum_length: usize) -> i64 {
    word_len(word) as i64 - minimum_length as i64 + 1
}

pub fn score_words<I, S>(words: I, minimum_length: usize) -> i64
    where I: IntoIterator<Item = S>, S: AsRef<str> {
    words.into_iter()
        .map(|w| score_word(w.as_ref(), minimum_length))
        .sum()
}
