use std::cmp::Ordering;

use crate::PlayerId;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByPlayer { player_idx: PlayerId },
    Tie,
}

impl GameResult {
    /// The player with strictly the most discs wins. Anything else is a tie.
    pub fn from_disc_counts(discs: &[usize]) -> Self {
        let mut leader: Option<(PlayerId, usize)> = None;
        let mut tied = false;
        for (player_idx, &count) in discs.iter().enumerate() {
            match leader {
                None => leader = Some((player_idx, count)),
                Some((_, best)) => match count.cmp(&best) {
                    Ordering::Greater => {
                        leader = Some((player_idx, count));
                        tied = false;
                    }
                    Ordering::Equal => tied = true,
                    Ordering::Less => {}
                },
            }
        }
        match leader {
            Some((player_idx, _)) if !tied => GameResult::WonByPlayer { player_idx },
            _ => GameResult::Tie,
        }
    }
}

/// The tally of a single finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalScore {
    /// Discs per player, indexed by player id.
    pub discs: Vec<usize>,
    pub result: GameResult,
}

impl FinalScore {
    pub fn new(discs: Vec<usize>) -> Self {
        let result = GameResult::from_disc_counts(&discs);
        Self { discs, result }
    }
}

impl std::fmt::Display for FinalScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<String> = self.discs.iter().map(|c| c.to_string()).collect();
        write!(f, "{}, ", counts.join(" - "))?;
        match self.result {
            GameResult::WonByPlayer { player_idx } => write!(f, "player {} wins", player_idx),
            GameResult::Tie => write!(f, "tie"),
        }
    }
}

/// Results of all games played on one board so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: Vec<usize>,
    pub ties: usize,
}

impl MatchScore {
    pub fn new(player_number: usize) -> Self {
        Self {
            wins: vec![0; player_number],
            ties: 0,
        }
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::WonByPlayer { player_idx } => {
                if self.wins.len() <= player_idx {
                    self.wins.resize(player_idx + 1, 0);
                }
                self.wins[player_idx] += 1;
            }
            GameResult::Tie => self.ties += 1,
        }
    }

    pub fn games_played(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.ties
    }
}
