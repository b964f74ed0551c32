use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mark played by the computer in [`GameMode::HumanVsComputer`]; the human always opens as X.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: MoveOutcome,
    pub status: RoundStatus,
}

/// Headline shown above the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLine {
    Menu,
    Turn(Mark),
    Won(Mark),
    Draw,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StatusLine::*;
        match self {
            Menu => f.write_str("Choose a game mode"),
            Turn(mark) => write!(f, "Player {mark}'s Turn"),
            Won(mark) => write!(f, "Player {mark} Wins!"),
            Draw => f.write_str("Game Ended in a Draw!"),
        }
    }
}

#[derive(Clone, Debug)]
struct Round {
    engine: GameEngine,
    pending: Option<Cell>,
}

/// Drives rounds between the menu, human input and the computer opponent.
///
/// A chosen but not yet applied computer move locks out human input until it
/// is committed, so the front end can pause between the two steps.
#[derive(Clone, Debug)]
pub struct Session<S = HeuristicStrategy> {
    strategy: S,
    round: Option<Round>,
    last_mode: Option<GameMode>,
}

impl<S: MoveStrategy> Session<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            round: None,
            last_mode: None,
        }
    }

    pub fn start(&mut self, mode: GameMode) {
        match &mut self.round {
            Some(round) => {
                round.engine.start_round(mode);
                round.pending = None;
            }
            None => {
                log::debug!("starting {mode} round");
                self.round = Some(Round {
                    engine: GameEngine::new(mode),
                    pending: None,
                });
            }
        }
        self.last_mode = Some(mode);
    }

    /// Starts over in the mode of the current or most recent round, does nothing from a fresh menu.
    pub fn restart(&mut self) {
        if let Some(mode) = self.last_mode {
            self.start(mode);
        }
    }

    pub fn back_to_menu(&mut self) {
        if self.round.take().is_some() {
            log::debug!("round abandoned");
        }
    }

    pub fn is_playing(&self) -> bool {
        self.round.is_some()
    }

    pub fn engine(&self) -> Option<&GameEngine> {
        self.round.as_ref().map(|round| &round.engine)
    }

    pub fn pending_computer_move(&self) -> Option<Cell> {
        self.round.as_ref().and_then(|round| round.pending)
    }

    /// Whether the computer holds the seat to move in a live round.
    pub fn awaiting_computer(&self) -> bool {
        self.engine().is_some_and(|engine| {
            engine.mode().has_computer()
                && !engine.is_finished()
                && engine.turn() == COMPUTER_MARK
        })
    }

    pub fn play_human(&mut self, cell: Cell) -> Result<TurnReport> {
        if self.round.is_none() {
            return Err(GameError::NoRound);
        }
        if self.awaiting_computer() || self.pending_computer_move().is_some() {
            return Err(GameError::ComputerTurn);
        }
        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        Ok(Self::play(&mut round.engine, cell))
    }

    /// Chooses the computer's cell and holds it until [`Session::commit_computer_move`].
    pub fn request_computer_move(&mut self) -> Result<Cell> {
        if let Some(cell) = self.pending_computer_move() {
            return Ok(cell);
        }
        if !self.awaiting_computer() {
            return Err(GameError::NotComputerTurn);
        }

        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        let cell = self
            .strategy
            .choose_move(
                round.engine.board(),
                COMPUTER_MARK,
                COMPUTER_MARK.opponent(),
            )
            .ok_or(GameError::NotComputerTurn)?;
        log::debug!("computer picked {cell}");
        round.pending = Some(cell);
        Ok(cell)
    }

    pub fn commit_computer_move(&mut self) -> Result<TurnReport> {
        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        let cell = round.pending.take().ok_or(GameError::NotComputerTurn)?;
        Ok(Self::play(&mut round.engine, cell))
    }

    pub fn play_computer_turn(&mut self) -> Result<TurnReport> {
        self.request_computer_move()?;
        self.commit_computer_move()
    }

    pub fn status_line(&self) -> StatusLine {
        let Some(engine) = self.engine() else {
            return StatusLine::Menu;
        };
        match engine.status() {
            RoundStatus::InProgress => StatusLine::Turn(engine.turn()),
            RoundStatus::Won(mark) => StatusLine::Won(mark),
            RoundStatus::Draw => StatusLine::Draw,
        }
    }

    fn play(engine: &mut GameEngine, cell: Cell) -> TurnReport {
        let outcome = engine.apply_move(cell);
        let status = if outcome.is_accepted() {
            engine.evaluate()
        } else {
            engine.status()
        };
        TurnReport { outcome, status }
    }
}

impl Default for Session<HeuristicStrategy> {
    fn default() -> Self {
        Self::new(HeuristicStrategy::seeded(0))
    }
}
