use serde::{Deserialize, Serialize};

use crate::*;

/// A mark that was accepted onto the board, with the rendering hints it produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub cell: Cell,
    pub mark: Mark,
    /// Live mark that the same player's next placement will evict.
    pub fade: Option<Cell>,
    /// Mark removed by this placement to keep the player within [`WINDOW`].
    pub evicted: Option<Cell>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(GameError),
    Placed(Placement),
}

impl MoveOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Placed(_))
    }

    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        self.is_accepted()
    }

    pub const fn placement(self) -> Option<Placement> {
        match self {
            Self::Placed(placement) => Some(placement),
            Self::Rejected(_) => None,
        }
    }

    pub const fn fade_cell(self) -> Option<Cell> {
        match self {
            Self::Placed(placement) => placement.fade,
            Self::Rejected(_) => None,
        }
    }

    pub const fn evicted_cell(self) -> Option<Cell> {
        match self {
            Self::Placed(placement) => placement.evicted,
            Self::Rejected(_) => None,
        }
    }
}

/// State of a single round: board, turn order and each player's live marks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    mode: GameMode,
    board: Board,
    x_moves: MoveQueue,
    o_moves: MoveQueue,
    turn: Mark,
    status: RoundStatus,
    last_mover: Option<Mark>,
}

impl GameEngine {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            board: Board::new(),
            x_moves: MoveQueue::new(),
            o_moves: MoveQueue::new(),
            turn: Mark::X,
            status: RoundStatus::InProgress,
            last_mover: None,
        }
    }

    pub fn start_round(&mut self, mode: GameMode) {
        log::debug!("starting {mode} round");
        self.mode = mode;
        self.board = Board::new();
        self.x_moves.clear();
        self.o_moves.clear();
        self.turn = Mark::X;
        self.status = RoundStatus::InProgress;
        self.last_mover = None;
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Mark of the most recently accepted move, which is who a win belongs to.
    pub fn last_mover(&self) -> Option<Mark> {
        self.last_mover
    }

    pub fn queue(&self, mark: Mark) -> &MoveQueue {
        match mark {
            Mark::X => &self.x_moves,
            Mark::O => &self.o_moves,
        }
    }

    /// Places the current player's mark at `cell`.
    ///
    /// Invalid moves leave the round untouched and come back as
    /// [`MoveOutcome::Rejected`]; they are never an error for the caller.
    pub fn apply_move(&mut self, cell: Cell) -> MoveOutcome {
        match self.try_apply_move(cell) {
            Ok(placement) => MoveOutcome::Placed(placement),
            Err(err) => {
                log::trace!("rejected move at {cell}: {err}");
                MoveOutcome::Rejected(err)
            }
        }
    }

    pub fn try_apply_move(&mut self, cell: Cell) -> Result<Placement> {
        self.check_in_progress()?;
        if !is_valid_cell(cell) {
            return Err(GameError::InvalidCell);
        }
        if !self.board.is_empty(cell) {
            return Err(GameError::Occupied);
        }

        let mark = self.turn;
        self.board.place(cell, mark);
        let queue = match mark {
            Mark::X => &mut self.x_moves,
            Mark::O => &mut self.o_moves,
        };
        queue.push(cell);

        // computed before eviction, so on the 4th mark this is the 2nd oldest
        let fade = queue.fading();
        let evicted = queue.evict_overflow();
        if let Some(evicted) = evicted {
            self.board.clear(evicted);
            log::debug!("{mark} mark at {evicted} expired");
        }

        self.last_mover = Some(mark);
        self.turn = mark.opponent();
        log::debug!("{mark} placed at {cell}, {} to move", self.turn);

        Ok(Placement {
            cell,
            mark,
            fade,
            evicted,
        })
    }

    /// Scans the board for a finished round and records the result.
    pub fn evaluate(&mut self) -> RoundStatus {
        if self.status.is_finished() {
            return self.status;
        }

        self.status = self.board.evaluate();
        match self.status {
            RoundStatus::Won(mark) => log::debug!("{mark} wins"),
            RoundStatus::Draw => log::debug!("round drawn"),
            RoundStatus::InProgress => {}
        }
        self.status
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::RoundFinished)
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, cells: &[Cell]) -> MoveOutcome {
        let mut last = MoveOutcome::Rejected(GameError::NoRound);
        for &cell in cells {
            last = engine.apply_move(cell);
            assert!(last.is_accepted(), "move at {cell} rejected: {last:?}");
        }
        last
    }

    #[test]
    fn start_round_resets_everything() {
        let mut engine = GameEngine::new(GameMode::HumanVsHuman);
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.evaluate();

        engine.start_round(GameMode::HumanVsComputer);

        assert_eq!(engine, GameEngine::new(GameMode::HumanVsComputer));
        assert_eq!(engine.turn(), Mark::X);
        assert_eq!(engine.status(), RoundStatus::InProgress);
    }

    #[test]
    fn turn_alternates_on_accepted_moves_only() {
        let mut engine = GameEngine::default();

        engine.apply_move(4);
        assert_eq!(engine.turn(), Mark::O);
        assert_eq!(engine.apply_move(4), MoveOutcome::Rejected(GameError::Occupied));
        assert_eq!(engine.turn(), Mark::O);
        engine.apply_move(0);
        assert_eq!(engine.turn(), Mark::X);
    }

    #[test]
    fn out_of_range_cell_is_rejected() {
        let mut engine = GameEngine::default();

        let outcome = engine.apply_move(9);

        assert_eq!(outcome, MoveOutcome::Rejected(GameError::InvalidCell));
        assert_eq!(engine, GameEngine::default());
    }

    #[test]
    fn occupied_cell_rejection_is_idempotent() {
        let mut engine = GameEngine::default();
        engine.apply_move(4);
        engine.apply_move(0);
        let snapshot = engine.clone();

        assert!(!engine.apply_move(4).is_accepted());
        let once = engine.clone();
        assert!(!engine.apply_move(4).is_accepted());

        assert_eq!(once, snapshot);
        assert_eq!(engine, snapshot);
    }

    #[test]
    fn fourth_mark_evicts_the_oldest() {
        let mut engine = GameEngine::default();
        // X: 0 1 5 7, O fills in between without ever lining up
        let outcome = play(&mut engine, &[0, 3, 1, 4, 5, 8, 7]);

        assert_eq!(outcome.evicted_cell(), Some(0));
        assert_eq!(engine.board()[0], None);
        assert_eq!(engine.queue(Mark::X).cells(), [1, 5, 7]);
        assert_eq!(engine.board().count(Mark::X), 3);
    }

    #[test]
    fn fade_warns_one_placement_before_eviction() {
        let mut engine = GameEngine::default();

        assert_eq!(play(&mut engine, &[0]).fade_cell(), None);
        play(&mut engine, &[3]);
        assert_eq!(play(&mut engine, &[1]).fade_cell(), None);
        play(&mut engine, &[4]);
        let third = play(&mut engine, &[5]);
        assert_eq!(third.fade_cell(), Some(0));
        assert_eq!(third.evicted_cell(), None);
        play(&mut engine, &[8]);
        let fourth = play(&mut engine, &[7]);
        assert_eq!(fourth.evicted_cell(), Some(0));
        assert_eq!(fourth.fade_cell(), Some(1));
    }

    #[test]
    fn win_belongs_to_the_player_who_just_moved() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(engine.turn(), Mark::O);
        assert_eq!(engine.evaluate(), RoundStatus::Won(Mark::X));
        assert_eq!(engine.last_mover(), Some(Mark::X));
    }

    #[test]
    fn finished_round_rejects_moves() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.evaluate();
        let snapshot = engine.clone();

        assert_eq!(
            engine.apply_move(8),
            MoveOutcome::Rejected(GameError::RoundFinished)
        );
        assert_eq!(engine, snapshot);
    }

    #[test]
    fn evicted_mark_cannot_complete_a_line() {
        let mut engine = GameEngine::default();
        // X: 0 1 8 then 2, which expires 0 before the top row is checked
        play(&mut engine, &[0, 3, 1, 4, 8, 6, 2]);

        assert_eq!(engine.board().get(0), None);
        assert_eq!(engine.evaluate(), RoundStatus::InProgress);
    }

    #[test]
    fn first_move_is_in_progress() {
        let mut engine = GameEngine::new(GameMode::HumanVsComputer);
        play(&mut engine, &[0]);

        assert_eq!(engine.evaluate(), RoundStatus::InProgress);
    }
}
