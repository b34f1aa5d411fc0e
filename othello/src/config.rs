use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// Who sits at the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Every seat is played by a human.
    HumanVsHuman,
    /// Player 0 is human, every other seat is played by the built-in heuristic.
    #[default]
    HumanVsHeuristicAi,
}

/// Who makes the decisions for a single seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    Human,
    Heuristic,
}

impl GameMode {
    pub fn controller_of(self, player: PlayerId) -> Controller {
        match self {
            GameMode::HumanVsHuman => Controller::Human,
            GameMode::HumanVsHeuristicAi if player == 0 => Controller::Human,
            GameMode::HumanVsHeuristicAi => Controller::Heuristic,
        }
    }
}

/// The parameters a game is set up with.
///
/// Missing keys fall back to the standard 8x8 two player game against the
/// heuristic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board. Normalized to an even number between 2 and 64.
    pub board_size: usize,
    /// Number of players taking turns. Clamped to between 2 and 10.
    pub player_number: usize,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            player_number: 2,
            mode: GameMode::default(),
        }
    }
}

impl GameConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Config file '{}' does not exist", path.display());
        }
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
