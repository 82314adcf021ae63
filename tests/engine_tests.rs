use std::io::Write;
use std::path::PathBuf;

use maplit::btreeset;
use word_search::board::Position;
use word_search::{create_game, ErrorKind, FileFormat, GameEngine, WordSearchGame};

fn sample_words() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("data/sample_words.txt");
    path
}

fn loaded_game() -> GameEngine {
    let mut game = create_game();
    game.load_lexicon(&sample_words()).unwrap();
    game
}

/// Checks that `path` is a simple chain of adjacent cells spelling `word`.
fn assert_spells(game: &GameEngine, path: &[usize], word: &str) {
    let board = game.grid();
    let positions: Vec<Position> = path.iter().map(|&i| Position::from_index(i, board.columns())).collect();
    let spelled: String = positions.iter().map(|&p| &board[p]).collect();
    assert_eq!(spelled, word);
    for pair in positions.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{:?} and {:?} are not adjacent", pair[0], pair[1]);
    }
    let mut distinct = path.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), path.len(), "path {:?} repeats a cell", path);
}

#[test]
fn lexicon_queries_before_load_are_not_ready() {
    let game = create_game();
    assert_eq!(game.is_valid_word("CAT").unwrap_err().kind(), ErrorKind::NotReady);
}

#[test]
fn loads_first_word_of_each_line() {
    let game = loaded_game();
    assert!(game.is_valid_word("peace").unwrap());
    assert!(game.is_valid_word("BALE").unwrap());
    assert!(!game.is_valid_word("calm").unwrap());
    assert!(!game.is_valid_word("").unwrap());
}

#[test]
fn reload_replaces_lexicon() {
    let mut game = loaded_game();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Zebra\nyak").unwrap();
    game.load_lexicon(file.path()).unwrap();
    assert!(game.is_valid_word("YAK").unwrap());
    assert!(!game.is_valid_word("ACE").unwrap());
}

#[test]
fn latin1_bytes_keep_the_rest_of_the_lexicon() {
    let mut game = create_game();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"cat\ncaf\xe9\npeel\n").unwrap();
    game.load_lexicon(file.path()).unwrap();
    assert!(game.is_valid_word("CAT").unwrap());
    assert!(game.is_valid_word("peel").unwrap());
    assert!(game.is_valid_prefix("CAF").unwrap());
}

#[test]
fn custom_file_format() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1;bent\n2;peel").unwrap();
    let mut game = GameEngine::with_format(FileFormat::builder().delimiter(';').word_column(1).build());
    game.load_lexicon(file.path()).unwrap();
    assert_eq!(game.all_valid_words(3).unwrap(), btreeset! {"BENT".to_string(), "PEEL".to_string()});
}

#[test]
fn valid_prefixes() {
    let game = loaded_game();
    for word in ["ACE", "PEACE", "QUITS"] {
        assert!(game.is_valid_prefix(word).unwrap());
        assert!(game.is_valid_prefix(&word[..1]).unwrap());
    }
    assert!(game.is_valid_prefix("pe").unwrap());
    assert!(!game.is_valid_prefix("PX").unwrap());
}

#[test]
fn bale_is_not_on_the_default_board() {
    // no A touches the only B
    let game = loaded_game();
    assert!(game.is_valid_word("BALE").unwrap());
    assert!(game.is_on_board("BALE").unwrap().is_empty());
}

#[test]
fn paths_on_the_default_board() {
    let game = loaded_game();
    for (word, expected) in [
        ("ALE", vec![4, 5, 0]),
        ("PEEL", vec![7, 6, 1, 5]),
        ("CAPE", vec![2, 3, 7, 6]),
        ("PEACE", vec![7, 6, 3, 2, 1]),
    ] {
        let path = game.is_on_board(word).unwrap();
        assert_eq!(path, expected);
        assert_spells(&game, &path, word);
    }
}

#[test]
fn all_valid_words_on_the_default_board() {
    let game = loaded_game();
    let words = game.all_valid_words(3).unwrap();
    let expected = btreeset! {
        "ACE", "ALE", "BENT", "CAPE", "EEL", "LEE", "LENT", "PEA", "PEACE", "PEEL", "TOY",
    };
    assert_eq!(words.iter().map(String::as_str).collect::<std::collections::BTreeSet<_>>(), expected);
    for word in &words {
        assert_spells(&game, &game.is_on_board(word).unwrap(), word);
    }
    assert_eq!(game.all_valid_words(3).unwrap(), words);
}

#[test]
fn multi_letter_board() {
    let mut game = loaded_game();
    game.set_board(&["qu", "i", "t", "s"]).unwrap();
    assert_eq!(game.board(), "QUITS");
    assert_eq!(game.is_on_board("quits").unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(
        game.all_valid_words(3).unwrap(),
        btreeset! {"QUIT".to_string(), "QUITS".to_string(), "SIT".to_string()}
    );
}

#[test]
fn five_cells_is_not_a_board() {
    let mut game = loaded_game();
    let err = game.set_board(&["A", "B", "C", "D", "E"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn scoring() {
    let game = loaded_game();
    let words = btreeset! {"CAT".to_string(), "HOUSE".to_string()};
    assert_eq!(game.score_for_words(&words, 3).unwrap(), 4);

    let found = game.all_valid_words(3).unwrap();
    // six three-letter words, four four-letter words and PEACE
    assert_eq!(game.score_for_words(&found, 3).unwrap(), 6 * 1 + 4 * 2 + 3);
}

#[test]
fn unreadable_lexicon_is_invalid_input() {
    let mut game = create_game();
    let dir = tempfile::tempdir().unwrap();
    let err = game.load_lexicon(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
