//! Text boards: rows of whitespace-separated tokens, rows separated by newlines or `/`.
//!
//! ```text
//! E E C A / A L E P / H N B O / Q T T Y
//! ```

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, line_ending, multispace0, space0, space1};
use nom::combinator::{all_consuming, map, value};
use nom::multi::separated_list1;
use nom::sequence::{delimited, tuple};
use nom::IResult;

use crate::alphabet::normalize;
use crate::board::flatten_rows;
use crate::error::{Result, WordSearchError};

fn token(input: &str) -> IResult<&str, String> {
    map(alpha1, normalize)(input)
}

fn row(input: &str) -> IResult<&str, Vec<String>> {
    separated_list1(space1, token)(input)
}

fn row_separator(input: &str) -> IResult<&str, ()> {
    value((), tuple((space0, alt((tag("/"), line_ending)), multispace0)))(input)
}

fn rows(input: &str) -> IResult<&str, Vec<Vec<String>>> {
    delimited(multispace0, separated_list1(row_separator, row), multispace0)(input)
}

/// Parses a text board into a flat, row-major token list.
pub fn parse_board(input: &str) -> Result<Vec<String>> {
    match all_consuming(rows)(input) {
        Ok((_, rows)) => flatten_rows(rows),
        Err(e) => Err(WordSearchError::invalid(format!("malformed board: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use crate::board::parse::{parse_board, row};
    use crate::error::ErrorKind;

    #[test]
    fn parses_a_row() {
        assert_eq!(row("a qu  b"), Ok(("", vec!["A".to_string(), "QU".to_string(), "B".to_string()])));
    }

    #[test]
    fn parses_slash_separated_rows() {
        let tokens = parse_board("E E C A / A L E P / H N B O / Q T T Y").unwrap();
        assert_eq!(tokens.concat(), "EECAALEPHNBOQTTY");
    }

    #[test]
    fn parses_multiline_boards() {
        let tokens = parse_board("\n  qu i\n\n t s  \n").unwrap();
        assert_eq!(tokens, vec!["QU", "I", "T", "S"]);
    }

    #[test]
    fn single_row_is_flat() {
        let tokens = parse_board("A B C D E").unwrap();
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(parse_board("A B\nC").unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_board("A 1 B").unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(parse_board("").unwrap_err().kind(), ErrorKind::InvalidInput);
    }
}
