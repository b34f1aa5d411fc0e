use tracing::debug;

use crate::heuristic::best_candidate;
use crate::{Board, Controller, IllegalPlacement, TurnOutcome};

impl Board {
    /// Plays the best scoring legal move for the player to move.
    ///
    /// Returns `Ok(None)` if the game has ended, without starting a new one.
    pub fn play_heuristic_move(&mut self) -> Result<Option<TurnOutcome>, IllegalPlacement> {
        if self.game_ended() {
            return Ok(None);
        }
        let Some(choice) = best_candidate(self.legal_move_candidates()) else {
            return Ok(None);
        };
        debug!(
            player = self.current_player(),
            position = %choice.position,
            score = choice.score,
            "Heuristic move"
        );
        self.place_disc(choice.position, None).map(Some)
    }
}

/// Lets the heuristic play for as long as it is a heuristic seat's turn.
///
/// Stops when a human is to move or the game has ended. The outcomes are
/// returned in the order the moves were played. If the human seat has to
/// pass, this can be more than one move.
pub fn run_automatic_turns(board: &mut Board) -> Result<Vec<TurnOutcome>, IllegalPlacement> {
    let mut outcomes = Vec::new();
    while !board.game_ended() && board.current_controller() == Controller::Heuristic {
        match board.play_heuristic_move()? {
            Some(outcome) => outcomes.push(outcome),
            None => break,
        }
    }
    Ok(outcomes)
}
