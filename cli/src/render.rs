use fadetoe_core::{Board, CELL_COUNT, Cell, Placement};
use std::fmt::Write;

/// Which live marks are about to expire, tracked from the engine's placement hints.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FadeMarks {
    fading: [bool; CELL_COUNT],
}

impl FadeMarks {
    pub(crate) fn clear(&mut self) {
        self.fading = [false; CELL_COUNT];
    }

    pub(crate) fn apply(&mut self, placement: &Placement) {
        if let Some(cell) = placement.evicted {
            self.fading[cell as usize] = false;
        }
        if let Some(cell) = placement.fade {
            self.fading[cell as usize] = true;
        }
    }

    pub(crate) fn is_fading(&self, cell: Cell) -> bool {
        self.fading[cell as usize]
    }
}

/// Draws the grid with empty cells numbered 1-9 and fading marks in lowercase.
pub(crate) fn render_board(board: &Board, fades: &FadeMarks) -> String {
    let mut out = String::new();
    for row in 0..3u8 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..3u8)
            .map(|col| {
                let cell = row * 3 + col;
                match board.get(cell) {
                    Some(mark) if fades.is_fading(cell) => mark.symbol().to_lowercase(),
                    Some(mark) => mark.symbol().to_string(),
                    None => (cell + 1).to_string(),
                }
            })
            .collect();
        let _ = writeln!(out, " {} ", cells.join(" | "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fadetoe_core::{GameEngine, GameMode};

    #[test]
    fn numbers_empty_cells_and_lowercases_fading_marks() {
        let mut engine = GameEngine::new(GameMode::HumanVsHuman);
        let mut fades = FadeMarks::default();
        for cell in [0, 3, 1, 4, 8] {
            let placement = engine.apply_move(cell).placement().unwrap();
            fades.apply(&placement);
        }

        let text = render_board(engine.board(), &fades);

        assert_eq!(
            text,
            " x | X | 3 \n---+---+---\n O | O | 6 \n---+---+---\n 7 | 8 | X \n"
        );
    }

    #[test]
    fn eviction_clears_the_fade() {
        let mut engine = GameEngine::new(GameMode::HumanVsHuman);
        let mut fades = FadeMarks::default();
        for cell in [0, 3, 1, 4, 8, 6, 5] {
            let placement = engine.apply_move(cell).placement().unwrap();
            fades.apply(&placement);
        }

        assert!(!fades.is_fading(0));
        assert!(fades.is_fading(1));
        assert!(fades.is_fading(3));
    }
}
