use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidCell,
    #[error("Cell is already occupied")]
    Occupied,
    #[error("Round already ended, no new moves are accepted")]
    RoundFinished,
    #[error("No round in progress")]
    NoRound,
    #[error("Waiting for the computer to move")]
    ComputerTurn,
    #[error("Computer has no move to make")]
    NotComputerTurn,
}

pub type Result<T> = core::result::Result<T, GameError>;
