use std::collections::BTreeSet;
use std::time::Instant;

use derive_new::new;
use tracing::{debug, trace};

use crate::alphabet::word_len;
use crate::board::{neighbors, Board, Position};
use crate::search::searchconfig::SearchConfig;
use crate::search::state::PathState;
use crate::wordlist::index::Index;

/// Collects every lexicon word of at least `min_word_len` characters that the board can spell.
///
/// Branches are abandoned as soon as the assembled string stops being a prefix of any
/// lexicon word, so the work done follows the shape of the dictionary, not the grid.
#[derive(new)]
pub struct Enumerator<'a, L: Index> {
    board: &'a Board,
    lexicon: &'a L,
    config: &'a SearchConfig,
}

impl<'a, L: Index> Enumerator<'a, L> {
    pub fn find_all(&self) -> BTreeSet<String> {
        let start_time = Instant::now();
        let mut found = BTreeSet::new();
        let mut state = PathState::new(self.board.dims());

        for start in self.board.positions() {
            let token = &self.board[start];
            state.start(start, token);
            self.record(&state, &mut found);
            if self.lexicon.has_prefix(token) {
                trace!(?start, token, "Exploring from start cell");
                self.extend(start, &mut state, &mut found);
            }
        }

        debug!(words = found.len(), min_word_len = self.config.min_word_len,
               "Enumerated board in {:.3}s", start_time.elapsed().as_secs_f64());
        found
    }

    fn record(&self, state: &PathState, found: &mut BTreeSet<String>) {
        let word = state.word();
        if word_len(word) >= self.config.min_word_len && self.lexicon.contains(word) {
            found.insert(word.to_string());
        }
    }

    fn extend(&self, from: Position, state: &mut PathState, found: &mut BTreeSet<String>) {
        for next in neighbors(self.board.dims(), from) {
            if state.is_visited(next) {
                continue;
            }
            state.push(next, &self.board[next]);
            if self.lexicon.has_prefix(state.word()) {
                self.record(state, found);
                self.extend(next, state, found);
            }
            state.pop();
        }
    }
}
