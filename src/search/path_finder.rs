use derive_new::new;
use tracing::{debug, trace};

use crate::alphabet::normalize;
use crate::board::{neighbors, Board, Position};
use crate::search::state::PathState;

/// Locates one path of adjacent, distinct cells whose tokens spell a given word.
///
/// Start cells are tried in row-major order and neighbours in the fixed
/// [`neighbors`] order; the first complete path found wins.
#[derive(new, Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    board: &'a Board,
}

impl<'a> PathFinder<'a> {
    /// Row-major indices of the path spelling `word`, or an empty vector when the board can't spell it.
    pub fn find(&self, word: &str) -> Vec<usize> {
        let target = normalize(word);
        let columns = self.board.columns();
        let mut state = PathState::new(self.board.dims());

        for start in self.board.positions() {
            let token = &self.board[start];
            if token == target {
                return vec![start.to_index(columns)];
            }
            if target.starts_with(token) {
                trace!(?start, token, "Trying start cell");
                state.start(start, token);
                if self.extend(start, &mut state, &target) {
                    debug!(word = %target, path = ?state.indices(), "Found word on board");
                    return state.indices();
                }
            }
        }
        debug!(word = %target, "Word not on board");
        Vec::new()
    }

    fn extend(&self, from: Position, state: &mut PathState, target: &str) -> bool {
        for next in neighbors(self.board.dims(), from) {
            if state.is_visited(next) {
                continue;
            }
            let token = &self.board[next];
            // state.word() is always a prefix of target, so this slice is on a char boundary
            if !target[state.word().len()..].starts_with(token) {
                continue;
            }
            state.push(next, token);
            if state.word().len() == target.len() || self.extend(next, state, target) {
                return true;
            }
            state.pop();
        }
        false
    }
}
