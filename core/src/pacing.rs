use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Pauses a front end inserts around the computer's move so it does not answer instantly.
///
/// The engine never waits on these itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// Before the computer picks its cell.
    pub think_delay_ms: u64,
    /// Between picking the cell and placing the mark.
    pub reply_delay_ms: u64,
}

impl Pacing {
    pub const INSTANT: Self = Self {
        think_delay_ms: 0,
        reply_delay_ms: 0,
    };

    pub const fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    pub const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            think_delay_ms: 500,
            reply_delay_ms: 300,
        }
    }
}
