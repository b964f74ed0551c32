use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Board position in row-major order, valid range is `0..CELL_COUNT`.
pub type Cell = u8;

/// Number of cells on the 3x3 board.
pub const CELL_COUNT: usize = 9;

/// Maximum number of live marks a player keeps on the board.
pub const WINDOW: usize = 3;

pub const CENTER: Cell = 4;

pub const CORNERS: [Cell; 4] = [0, 2, 6, 8];

/// Every line that wins the round, in the order they are checked: rows, columns, then diagonals.
pub const WIN_PATTERNS: [[Cell; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const fn is_valid_cell(cell: Cell) -> bool {
    (cell as usize) < CELL_COUNT
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
}

impl GameMode {
    pub const fn has_computer(self) -> bool {
        matches!(self, Self::HumanVsComputer)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::HumanVsComputer
    }
}

impl FromStr for GameMode {
    type Err = UnknownGameMode;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        use GameMode::*;
        match s {
            "player" | "pvp" | "human" | "human-vs-human" => Ok(HumanVsHuman),
            "computer" | "cpu" | "ai" | "human-vs-computer" => Ok(HumanVsComputer),
            _ => Err(UnknownGameMode),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GameMode::*;
        f.write_str(match self {
            HumanVsHuman => "human-vs-human",
            HumanVsComputer => "human-vs-computer",
        })
    }
}

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("unknown game mode, expected `player` or `computer`")]
pub struct UnknownGameMode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl RoundStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }

    pub const fn winner(self) -> Option<Mark> {
        match self {
            Self::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl Default for RoundStatus {
    fn default() -> Self {
        Self::InProgress
    }
}
