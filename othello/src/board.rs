use tracing::{debug, trace};

use crate::heuristic::{score_position, Candidate};
use crate::{
    Controller, Direction, FinalScore, GameConfig, GameMode, IllegalPlacement, MatchScore,
    ParseLayoutError, Position,
};

/// The largest side length a board can have. Larger sizes are clamped.
pub const MAX_BOARD_SIZE: usize = 64;

/// The most players a board can seat, one per digit of a layout.
pub const MAX_PLAYERS: usize = 10;

/// Identifies a player by their seat, starting at 0. Player 0 moves first.
pub type PlayerId = usize;

/// The contents of a single square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SquareState {
    #[default]
    Empty,
    Occupied(PlayerId),
}

/// Whose turn it is after a placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextTurn {
    /// `player` has at least one legal move and should play next.
    Move {
        player: PlayerId,
        controller: Controller,
    },
    /// Nobody can move anymore.
    GameEnded { discs: Vec<usize> },
}

/// Summarizes the outcome of a successful placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub position: Position,
    /// The discs that changed ownership, excluding the placed disc.
    pub flipped: Vec<Position>,
    /// Players whose turn was skipped because they had no legal move, in order.
    pub passed: Vec<PlayerId>,
    pub next: NextTurn,
}

/// A square Othello board together with the turn state of the game on it.
//
// The candidates are a cache of the legal moves of `next_player`. Every method
// that changes `squares` or `next_player` recomputes them before returning.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    player_number: usize,
    mode: GameMode,
    /// Row-major, `size * size` entries.
    squares: Vec<SquareState>,
    next_player: PlayerId,
    game_ended: bool,
    candidates: Vec<Candidate>,
    match_score: MatchScore,
}

impl Board {
    /// Creates a board in the opening position.
    ///
    /// `size` is rounded up to an even number between 2 and
    /// [`MAX_BOARD_SIZE`], and `player_number` is clamped to
    /// `2..=`[`MAX_PLAYERS`].
    pub fn new(size: usize, player_number: usize, mode: GameMode) -> Self {
        let mut board = Self {
            size: 0,
            player_number: 0,
            mode,
            squares: Vec::new(),
            next_player: 0,
            game_ended: false,
            candidates: Vec::new(),
            match_score: MatchScore::default(),
        };
        board.initialize(size, player_number);
        board
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, config.player_number, config.mode)
    }

    /// Builds a position from a textual layout.
    ///
    /// Each non-blank line is a row, `.` is an empty square and a digit is a
    /// disc of that player. Whitespace inside a row is ignored. The number of
    /// players is the highest digit plus one, but at least 2.
    ///
    /// The turn is then settled as after a move: if `next_player` cannot move,
    /// the turn passes on, and if nobody can move the game is over.
    pub fn from_layout(
        layout: &str,
        next_player: PlayerId,
        mode: GameMode,
    ) -> Result<Self, ParseLayoutError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size < 2 || size % 2 != 0 || size > MAX_BOARD_SIZE {
            return Err(ParseLayoutError::InvalidSize { rows: size });
        }

        let mut squares = Vec::with_capacity(size * size);
        let mut player_number = 2;
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ParseLayoutError::RaggedRow {
                    row: row_idx,
                    len: row.len(),
                });
            }
            for &c in row {
                let square = match c {
                    '.' => SquareState::Empty,
                    _ => match c.to_digit(10) {
                        Some(digit) => {
                            let player = digit as PlayerId;
                            player_number = player_number.max(player + 1);
                            SquareState::Occupied(player)
                        }
                        None => {
                            return Err(ParseLayoutError::InvalidSquare {
                                row: row_idx,
                                found: c,
                            })
                        }
                    },
                };
                squares.push(square);
            }
        }

        if next_player >= player_number {
            return Err(ParseLayoutError::NextPlayerOutOfRange {
                player: next_player,
            });
        }

        let mut board = Self {
            size,
            player_number,
            mode,
            squares,
            next_player,
            game_ended: false,
            candidates: Vec::new(),
            match_score: MatchScore::new(player_number),
        };
        board.settle_turn(next_player);
        Ok(board)
    }

    /// Resets the board to the opening position of a new game.
    ///
    /// The [`MatchScore`] of earlier games is kept.
    pub fn initialize(&mut self, size: usize, player_number: usize) {
        let size = normalize_size(size);
        let player_number = player_number.clamp(2, MAX_PLAYERS);

        self.size = size;
        self.player_number = player_number;
        self.squares = vec![SquareState::Empty; size * size];

        let c = (size / 2) as i32;
        for (x, y, player) in [(c, c - 1, 0), (c - 1, c, 0), (c - 1, c - 1, 1), (c, c, 1)] {
            self.set(Position::new(x, y), SquareState::Occupied(player));
        }

        if self.match_score.wins.len() < player_number {
            self.match_score.wins.resize(player_number, 0);
        }
        self.next_player = 0;
        self.game_ended = false;
        self.candidates = self.compute_candidates(0);
    }

    /// Tallies the current game into the [`MatchScore`] and starts a new one
    /// with the same dimensions.
    pub fn start_next_game(&mut self) -> FinalScore {
        let final_score = FinalScore::new(self.disc_counts());
        self.match_score.record(final_score.result);
        debug!(%final_score, games_played = self.match_score.games_played(), "Starting next game");
        self.initialize(self.size, self.player_number);
        final_score
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn player_number(&self) -> usize {
        self.player_number
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The player to move. After the game ended, this is the player who would
    /// have moved next.
    pub fn current_player(&self) -> PlayerId {
        self.next_player
    }

    pub fn current_controller(&self) -> Controller {
        self.mode.controller_of(self.next_player)
    }

    pub fn game_ended(&self) -> bool {
        self.game_ended
    }

    pub fn match_score(&self) -> &MatchScore {
        &self.match_score
    }

    /// The legal moves of the player to move, in row-major order.
    ///
    /// Empty if and only if the game has ended.
    pub fn legal_move_candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns `None` if the position is not on the board.
    pub fn square_state_at(&self, position: Position) -> Option<SquareState> {
        self.index(position).map(|idx| self.squares[idx])
    }

    /// All squares with their positions, in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Position, SquareState)> + '_ {
        let size = self.size;
        self.squares.iter().enumerate().map(move |(idx, &square)| {
            let position = Position::new((idx % size) as i32, (idx / size) as i32);
            (position, square)
        })
    }

    /// Number of discs of every player, indexed by player id.
    pub fn disc_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.player_number];
        for square in &self.squares {
            if let SquareState::Occupied(player) = *square {
                counts[player] += 1;
            }
        }
        counts
    }

    /// Number of discs of player 0 and player 1.
    pub fn count_discs(&self) -> (usize, usize) {
        let counts = self.disc_counts();
        (counts[0], counts[1])
    }

    /// Whether `player` (by default the player to move) may place a disc at `position`.
    pub fn is_legal_move(&self, position: Position, player: Option<PlayerId>) -> bool {
        self.check_placement(position, player).is_ok()
    }

    /// Places a disc and flips every captured disc, then hands the turn on.
    ///
    /// `player` defaults to the player to move. If the game has already ended,
    /// nothing is placed: the finished game is tallied, a new game is started
    /// and [`IllegalPlacement::GameAlreadyEnded`] is returned.
    pub fn place_disc(
        &mut self,
        position: Position,
        player: Option<PlayerId>,
    ) -> Result<TurnOutcome, IllegalPlacement> {
        if self.game_ended {
            let final_score = self.start_next_game();
            return Err(IllegalPlacement::GameAlreadyEnded { final_score });
        }

        let player = self.check_placement(position, player)?;

        let mut flipped = Vec::new();
        for direction in Direction::ALL {
            let run = self.capture_run(position, direction, player);
            let mut cursor = position;
            for _ in 0..run {
                cursor = cursor.step(direction);
                flipped.push(cursor);
            }
        }

        self.set(position, SquareState::Occupied(player));
        for &captured in &flipped {
            self.set(captured, SquareState::Occupied(player));
        }
        trace!(player, %position, flipped = flipped.len(), "Placed disc");

        let (passed, next) = self.settle_turn((player + 1) % self.player_number);
        Ok(TurnOutcome {
            player,
            position,
            flipped,
            passed,
            next,
        })
    }

    /// Hands the turn to the first player, starting at `first`, who has a
    /// legal move. Ends the game if nobody has one.
    fn settle_turn(&mut self, first: PlayerId) -> (Vec<PlayerId>, NextTurn) {
        let mut passed = Vec::new();
        for offset in 0..self.player_number {
            let player = (first + offset) % self.player_number;
            let candidates = self.compute_candidates(player);
            if !candidates.is_empty() {
                self.next_player = player;
                self.candidates = candidates;
                if !passed.is_empty() {
                    debug!(?passed, next_player = player, "Turn passed");
                }
                let controller = self.mode.controller_of(player);
                return (passed, NextTurn::Move { player, controller });
            }
            passed.push(player);
        }

        self.next_player = first;
        self.candidates = Vec::new();
        self.game_ended = true;
        let discs = self.disc_counts();
        debug!(?discs, "Game ended");
        (Vec::new(), NextTurn::GameEnded { discs })
    }

    fn check_placement(
        &self,
        position: Position,
        player: Option<PlayerId>,
    ) -> Result<PlayerId, IllegalPlacement> {
        let player = player.unwrap_or(self.next_player);
        if player >= self.player_number {
            return Err(IllegalPlacement::UnknownPlayer { player });
        }
        match self.square_state_at(position) {
            None => Err(IllegalPlacement::OutOfBounds { position }),
            Some(SquareState::Occupied(_)) => Err(IllegalPlacement::SquareOccupied { position }),
            Some(SquareState::Empty) if !self.captures_anything(position, player) => {
                Err(IllegalPlacement::NoCapture { position })
            }
            Some(SquareState::Empty) => Ok(player),
        }
    }

    fn captures_anything(&self, position: Position, player: PlayerId) -> bool {
        Direction::ALL
            .into_iter()
            .any(|direction| self.capture_run(position, direction, player) > 0)
    }

    /// Number of opposing discs that a disc of `player` at `position` would
    /// capture along `direction`.
    ///
    /// The run only counts if it is closed off by a disc of `player`; running
    /// into an empty square or off the board captures nothing.
    fn capture_run(&self, position: Position, direction: Direction, player: PlayerId) -> usize {
        let mut cursor = position.step(direction);
        let mut run = 0;
        loop {
            match self.square_state_at(cursor) {
                None | Some(SquareState::Empty) => return 0,
                Some(SquareState::Occupied(owner)) if owner == player => return run,
                Some(SquareState::Occupied(_)) => run += 1,
            }
            cursor = cursor.step(direction);
        }
    }

    fn compute_candidates(&self, player: PlayerId) -> Vec<Candidate> {
        self.squares()
            .filter(|&(position, square)| {
                square == SquareState::Empty && self.captures_anything(position, player)
            })
            .map(|(position, _)| Candidate {
                position,
                score: score_position(position, self.size),
            })
            .collect()
    }

    fn index(&self, position: Position) -> Option<usize> {
        let size = self.size as i32;
        let Position { x, y } = position;
        if x < 0 || y < 0 || x >= size || y >= size {
            None
        } else {
            Some((y * size + x) as usize)
        }
    }

    fn set(&mut self, position: Position, square: SquareState) {
        if let Some(idx) = self.index(position) {
            self.squares[idx] = square;
        }
    }
}

fn normalize_size(size: usize) -> usize {
    let size = size.clamp(2, MAX_BOARD_SIZE);
    size + size % 2
}
