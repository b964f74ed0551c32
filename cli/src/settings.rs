use anyhow::{Context, Result};
use fadetoe_core::{GameMode, Pacing};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a run can be configured with, from a JSON file and then the command line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub mode: Option<GameMode>,
    pub seed: Option<u64>,
    pub pacing: Pacing,
}

impl Settings {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub(crate) fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Values given on the command line win over the file.
    pub(crate) fn merge(mut self, args: &crate::Args) -> Self {
        if args.mode.is_some() {
            self.mode = args.mode;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(ms) = args.think_ms {
            self.pacing.think_delay_ms = ms;
        }
        if let Some(ms) = args.reply_ms {
            self.pacing.reply_delay_ms = ms;
        }
        self
    }
}
