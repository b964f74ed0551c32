use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of the 3x3 grid, `None` marks an empty cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            squares: [None; CELL_COUNT],
        }
    }

    /// Builds an arbitrary snapshot, the sliding window is only enforced by [`GameEngine`].
    pub const fn from_squares(squares: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { squares }
    }

    pub const fn squares(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.squares
    }

    /// Out of range cells read as empty.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.squares.get(cell as usize).copied().flatten()
    }

    /// Whether `cell` is on the board and free.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.squares.get(cell as usize), Some(None))
    }

    pub fn empty_cells(&self) -> Vec<Cell> {
        (0..CELL_COUNT as Cell)
            .filter(|&cell| self.is_empty(cell))
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|&&square| square == Some(mark))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }

    /// Mark filling the first satisfied pattern in [`WIN_PATTERNS`] order.
    pub fn winner(&self) -> Option<Mark> {
        WIN_PATTERNS.iter().find_map(|&[a, b, c]| {
            let mark = self.get(a)?;
            (self.get(b) == Some(mark) && self.get(c) == Some(mark)).then_some(mark)
        })
    }

    pub fn evaluate(&self) -> RoundStatus {
        if let Some(mark) = self.winner() {
            RoundStatus::Won(mark)
        } else if self.is_full() {
            RoundStatus::Draw
        } else {
            RoundStatus::InProgress
        }
    }

    pub(crate) fn place(&mut self, cell: Cell, mark: Mark) {
        self.squares[cell as usize] = Some(mark);
    }

    pub(crate) fn clear(&mut self, cell: Cell) {
        self.squares[cell as usize] = None;
    }
}

impl Index<Cell> for Board {
    type Output = Option<Mark>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.squares[cell as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for square in squares {
                f.write_str(square.map_or(".", Mark::symbol))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board(rows: &str) -> Board {
    let mut squares = [None; CELL_COUNT];
    for (square, ch) in squares
        .iter_mut()
        .zip(rows.chars().filter(|ch| !ch.is_whitespace()))
    {
        *square = match ch {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from_squares(squares)
}
