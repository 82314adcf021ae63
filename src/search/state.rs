use crate::board::{Dimensions, Position};

#[derive(Debug, Clone, Copy)]
struct Step {
    position: Position,
    token_len: usize,
}

/// The word assembled so far and the live path that spells it.
///
/// A cell is marked visited exactly while it is on the path: [`PathState::push`] marks it
/// and [`PathState::pop`] clears it, so callers bracket each recursive step with a push/pop pair.
#[derive(Debug, Clone)]
pub struct PathState {
    word: String,
    steps: Vec<Step>,
    visited: Vec<bool>,
    columns: usize,
}

impl PathState {
    pub fn new(dims: Dimensions) -> PathState {
        let (rows, columns) = dims;
        PathState {
            word: String::new(),
            steps: Vec::with_capacity(rows * columns),
            visited: vec![false; rows * columns],
            columns,
        }
    }

    /// Drops the whole path and starts a fresh one at `position`.
    pub fn start(&mut self, position: Position, token: &str) {
        self.clear();
        self.push(position, token);
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    pub fn push(&mut self, position: Position, token: &str) {
        let idx = position.to_index(self.columns);
        debug_assert!(!self.visited[idx], "{:?} is already on the path", position);
        self.visited[idx] = true;
        self.word.push_str(token);
        self.steps.push(Step { position, token_len: token.len() });
    }

    /// Removes the last cell, truncating the word by that cell's whole token.
    pub fn pop(&mut self) -> Option<Position> {
        let step = self.steps.pop()?;
        self.visited[step.position.to_index(self.columns)] = false;
        self.word.truncate(self.word.len() - step.token_len);
        Some(step.position)
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.visited[position.to_index(self.columns)]
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn last(&self) -> Option<Position> {
        self.steps.last().map(|s| s.position)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.steps.iter().map(|s| s.position)
    }

    /// The live path as row-major indices.
    pub fn indices(&self) -> Vec<usize> {
        self.positions().map(|p| p.to_index(self.columns)).collect()
    }
}
