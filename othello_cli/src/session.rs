use std::io::{BufRead, Write};

use othello::{
    run_automatic_turns, Board, IllegalPlacement, MatchScore, NextTurn, Position, TurnOutcome,
};
use tracing::{debug, info};

use crate::command::Command;

/// An interactive game on the console.
///
/// Reads one [`Command`] per line from `input` and writes the board and
/// everything that happened to `output`. Heuristic seats are played
/// automatically after every human move.
pub struct Session<R, W> {
    board: Board,
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    // Should always be empty before and after read_command().
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
            buf: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the input is exhausted or the player quits.
    ///
    /// Returns the results of all games that were finished during the session.
    pub fn run(&mut self) -> anyhow::Result<MatchScore> {
        info!(
            size = self.board.size(),
            players = self.board.player_number(),
            mode = ?self.board.mode(),
            "Starting session"
        );
        self.play_automatic_turns()?;

        loop {
            writeln!(self.output, "\n{}\n", self.board)?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(command) = self.read_command()? else {
                break;
            };
            match command {
                Command::Quit => break,
                Command::Hint => self.print_hints()?,
                Command::NewGame => {
                    let game_ended = self.board.game_ended();
                    let final_score = self.board.start_next_game();
                    if game_ended {
                        writeln!(
                            self.output,
                            "Final score of the last game: {}. Starting a new game.",
                            final_score
                        )?;
                    } else {
                        writeln!(self.output, "Game abandoned at {}", final_score)?;
                    }
                    self.play_automatic_turns()?;
                }
                Command::Place(position) => self.place(position)?,
            }
        }

        let match_score = self.board.match_score().clone();
        info!(wins = ?match_score.wins, ties = match_score.ties, "Session ended");
        Ok(match_score)
    }

    /// Returns `None` at the end of the input. Lines that cannot be parsed are
    /// reported and skipped, including lines that are not valid UTF-8.
    fn read_command(&mut self) -> anyhow::Result<Option<Command>> {
        loop {
            self.buf.clear();
            let num_bytes_read = self.input.read_until(b'\n', &mut self.buf)?;
            if num_bytes_read == 0 {
                return Ok(None);
            }
            let parsed = String::from_utf8_lossy(&self.buf).trim().parse::<Command>();
            self.buf.clear();
            match parsed {
                Ok(command) => return Ok(Some(command)),
                Err(err) => {
                    debug!(%err, "Could not parse input");
                    writeln!(self.output, "{}", err)?;
                    write!(self.output, "> ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn place(&mut self, position: Position) -> anyhow::Result<()> {
        match self.board.place_disc(position, None) {
            Ok(outcome) => {
                self.report(&outcome)?;
                self.play_automatic_turns()?;
            }
            Err(IllegalPlacement::GameAlreadyEnded { final_score }) => {
                writeln!(
                    self.output,
                    "Final score of the last game: {}. Starting a new game.",
                    final_score
                )?;
                self.play_automatic_turns()?;
            }
            Err(err) => {
                debug!(%err, "Illegal placement");
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(())
    }

    fn play_automatic_turns(&mut self) -> anyhow::Result<()> {
        for outcome in run_automatic_turns(&mut self.board)? {
            writeln!(
                self.output,
                "Player {} plays {} {}",
                outcome.player,
                outcome.position.x + 1,
                outcome.position.y + 1
            )?;
            self.report(&outcome)?;
        }
        Ok(())
    }

    fn report(&mut self, outcome: &TurnOutcome) -> std::io::Result<()> {
        for player in &outcome.passed {
            writeln!(self.output, "Player {} has no legal move and passes", player)?;
        }
        if let NextTurn::GameEnded { discs } = &outcome.next {
            let counts: Vec<String> = discs.iter().map(|c| c.to_string()).collect();
            writeln!(
                self.output,
                "Game over: {}. Enter any move to start the next game.",
                counts.join(" - ")
            )?;
        }
        Ok(())
    }

    fn print_hints(&mut self) -> std::io::Result<()> {
        let candidates = self.board.legal_move_candidates();
        if candidates.is_empty() {
            return writeln!(self.output, "No legal moves");
        }
        for candidate in candidates {
            writeln!(
                self.output,
                "{} {} (score {})",
                candidate.position.x + 1,
                candidate.position.y + 1,
                candidate.score
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use othello::{GameMode, SquareState};

    use super::*;

    fn run_session(board: Board, input: &str) -> (Board, MatchScore, String) {
        run_session_on_bytes(board, input.as_bytes())
    }

    fn run_session_on_bytes(board: Board, input: &[u8]) -> (Board, MatchScore, String) {
        let mut session = Session::new(board, Cursor::new(input), Vec::new());
        let match_score = session.run().unwrap();
        let board = session.board().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (board, match_score, output)
    }

    #[test]
    fn human_move_is_placed() {
        let board = Board::new(8, 2, GameMode::HumanVsHuman);
        let (board, _, output) = run_session(board, "3 4\nquit\n");
        assert_eq!(board.current_player(), 1);
        assert_eq!(board.count_discs(), (4, 1));
        assert_eq!(
            board.square_state_at(Position::new(2, 3)),
            Some(SquareState::Occupied(0))
        );
        assert!(output.contains("Next player: 1 ○"));
    }

    #[test]
    fn heuristic_replies_after_the_human() {
        let board = Board::new(8, 2, GameMode::HumanVsHeuristicAi);
        let (board, _, output) = run_session(board, "3 4\n");
        assert!(output.contains("Player 1 plays 3 3"));
        assert_eq!(board.current_player(), 0);
        assert_eq!(board.count_discs(), (3, 3));
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let board = Board::new(8, 2, GameMode::HumanVsHuman);
        let (board, _, output) = run_session(board, "x 4\n1 1\n9 9\n\n3 4\n");
        assert!(output.contains("'x' is not a coordinate"));
        assert!(output.contains("would not capture"));
        assert!(output.contains("outside of the board"));
        assert_eq!(board.count_discs(), (4, 1));
    }

    #[test]
    fn hints_list_the_candidates() {
        let board = Board::new(8, 2, GameMode::HumanVsHuman);
        let (_, _, output) = run_session(board, "hint\n");
        assert!(output.contains("4 3 (score 1)"));
        assert!(output.contains("3 4 (score 1)"));
    }

    #[test]
    fn finished_game_is_tallied_and_restarted() {
        let board = Board::from_layout(
            "
            ......10
            ........
            ........
            ........
            ........
            ........
            ........
            01......
            ",
            0,
            GameMode::HumanVsHuman,
        )
        .unwrap();
        let (board, match_score, output) = run_session(board, "3 8\n6 1\n4 4\n");

        assert!(output.contains("Player 1 has no legal move and passes"));
        assert!(output.contains("Game over: 6 - 0"));
        assert!(output.contains("Final score of the last game: 6 - 0, player 0 wins"));
        assert_eq!(match_score.wins, vec![1, 0]);
        assert!(!board.game_ended());
        assert_eq!(board.count_discs(), (2, 2));
    }

    #[test]
    fn new_game_command_abandons_the_game() {
        let board = Board::new(8, 2, GameMode::HumanVsHuman);
        let (board, match_score, output) = run_session(board, "3 4\nnew\n");
        assert!(output.contains("Game abandoned at 4 - 1, player 0 wins"));
        assert_eq!(match_score.games_played(), 1);
        assert_eq!(board.count_discs(), (2, 2));
    }

    #[test]
    fn invalid_utf8_is_reported_and_skipped() {
        let board = Board::new(8, 2, GameMode::HumanVsHuman);
        let (board, _, output) = run_session_on_bytes(board, b"\xff\xfe\n3 4\n");
        assert!(output.contains("but got 1 values"));
        assert_eq!(board.count_discs(), (4, 1));
        assert_eq!(board.current_player(), 1);
    }

    #[test]
    fn new_game_command_after_the_game_ended() {
        let board = Board::from_layout("00\n00", 0, GameMode::HumanVsHuman).unwrap();
        assert!(board.game_ended());
        let (board, match_score, output) = run_session(board, "new\n");
        assert!(output.contains("Final score of the last game: 4 - 0, player 0 wins"));
        assert!(!output.contains("Game abandoned"));
        assert_eq!(match_score.wins, vec![1, 0]);
        assert!(!board.game_ended());
    }
}
