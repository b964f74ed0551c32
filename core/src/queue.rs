use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Cells holding one player's live marks, oldest first.
///
/// Holds at most [`WINDOW`] cells between moves; the placement that pushes it
/// past the window is immediately followed by [`MoveQueue::evict_overflow`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveQueue {
    cells: SmallVec<[Cell; WINDOW + 1]>,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn oldest(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// The cell [`WINDOW`] entries from the end, which the player's next placement evicts.
    pub fn fading(&self) -> Option<Cell> {
        self.cells
            .len()
            .checked_sub(WINDOW)
            .map(|index| self.cells[index])
    }

    /// Drops the oldest cell once the queue holds more than [`WINDOW`] entries.
    pub(crate) fn evict_overflow(&mut self) -> Option<Cell> {
        (self.cells.len() > WINDOW).then(|| self.cells.remove(0))
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}
