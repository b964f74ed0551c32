use rand::prelude::*;

use crate::*;

/// Picks the next cell for an automated player.
pub trait MoveStrategy {
    /// Returns `None` only when the board has no empty cell.
    fn choose_move(&mut self, board: &Board, own: Mark, opponent: Mark) -> Option<Cell>;
}

/// Finds the cell that completes a line of `mark`, scanning [`WIN_PATTERNS`] in order.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Cell> {
    let owns = |cell| board.get(cell) == Some(mark);

    WIN_PATTERNS.iter().find_map(|&[a, b, c]| {
        [(a, b, c), (a, c, b), (b, c, a)]
            .into_iter()
            .find(|&(first, second, gap)| owns(first) && owns(second) && board.is_empty(gap))
            .map(|(_, _, gap)| gap)
    })
}

/// Fixed-priority opponent: win, block, center, a random corner, then any random cell.
#[derive(Clone, Debug)]
pub struct HeuristicStrategy<R = SmallRng> {
    rng: R,
}

impl HeuristicStrategy<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HeuristicStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, cells: &[Cell]) -> Option<Cell> {
        if cells.is_empty() {
            None
        } else {
            Some(cells[self.rng.random_range(0..cells.len())])
        }
    }
}

impl<R: Rng> MoveStrategy for HeuristicStrategy<R> {
    fn choose_move(&mut self, board: &Board, own: Mark, opponent: Mark) -> Option<Cell> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            log::warn!("no empty cell left for {own}");
            return None;
        }

        if let Some(cell) = find_winning_move(board, own) {
            log::debug!("{own} wins at {cell}");
            return Some(cell);
        }

        if let Some(cell) = find_winning_move(board, opponent) {
            log::debug!("{own} blocks {opponent} at {cell}");
            return Some(cell);
        }

        if board.is_empty(CENTER) {
            return Some(CENTER);
        }

        let corners: alloc::vec::Vec<Cell> = CORNERS
            .into_iter()
            .filter(|&cell| board.is_empty(cell))
            .collect();
        self.pick(&corners).or_else(|| self.pick(&empty))
    }
}
