use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use word_search::alphabet::normalize;
use word_search::board::parse::parse_board;
use word_search::board::BoardLayout;
use word_search::{create_game, Board, FileFormat, WordSearchGame};

/// Find every dictionary word on a word-search board.
#[derive(StructOpt)]
struct Cli {
    /// Word list file; the first word on each line is used
    #[structopt(parse(from_os_str))]
    lexicon: PathBuf,
    /// Board tokens in row-major order; the count must be a perfect square
    #[structopt(long, conflicts_with = "board-file")]
    board: Vec<String>,
    /// Board file: rows of tokens separated by newlines or '/', or JSON if it ends in .json
    #[structopt(long, parse(from_os_str))]
    board_file: Option<PathBuf>,
    /// Shortest word to report
    #[structopt(long, default_value = "3")]
    min_len: usize,
    /// Words to locate on the board
    #[structopt(long)]
    find: Vec<String>,
    /// Print results as JSON
    #[structopt(long)]
    json: bool,
    /// Column delimiter in the word list (default: whitespace)
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word
    #[structopt(long)]
    column: Option<usize>,
}

#[derive(Serialize)]
struct Report<'a> {
    board: &'a Board,
    min_len: usize,
    score: i64,
    words: &'a BTreeSet<String>,
    paths: BTreeMap<String, Vec<usize>>,
}

fn read_board(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    if path.extension().map_or(false, |ext| ext == "json") {
        Ok(serde_json::from_str::<BoardLayout>(&text)?.into_tokens()?)
    } else {
        Ok(parse_board(&text)?)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Cli::from_args();

    let mut game = create_game();
    game.load_lexicon_with(&args.lexicon, &FileFormat::new(args.delimiter, args.column))?;

    let tokens = match &args.board_file {
        Some(path) => read_board(path)?,
        None => args.board.clone(),
    };
    if !tokens.is_empty() {
        game.set_board(&tokens.iter().map(String::as_str).collect::<Vec<_>>())?;
    }

    let start = Instant::now();
    let words = game.all_valid_words(args.min_len)?;
    let score = game.score_for_words(&words, args.min_len)?;
    info!("Found {} words in {:.3}s", words.len(), start.elapsed().as_secs_f64());

    let mut paths = BTreeMap::new();
    for word in &args.find {
        paths.insert(normalize(word), game.is_on_board(word)?);
    }

    if args.json {
        let report = Report { board: game.grid(), min_len: args.min_len, score, words: &words, paths };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", game.grid());
    println!();
    for (word, path) in &paths {
        if path.is_empty() {
            println!("{}: not on board", word);
        } else {
            println!("{}: {:?}", word, path);
        }
    }
    println!("{} words, score {}", words.len(), score);
    for word in &words {
        println!("{}", word);
    }
    Ok(())
}
