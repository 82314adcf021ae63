/// Canonical case for every word, prefix and board token.
pub fn normalize(s: &str) -> String {
    s.to_uppercase()
}

/// Length of a word in characters, the unit minimum lengths and scores are measured in.
pub fn word_len(s: &str) -> usize {
    s.chars().count()
}
