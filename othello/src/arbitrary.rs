use quickcheck::{Arbitrary, Gen};

use crate::{Board, GameMode, Position};

/// A board reached by playing random legal moves from the opening.
#[derive(Clone, Debug)]
pub struct ReachableBoard(pub Board);

impl Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = *g.choose(&[4usize, 6, 8, 10]).unwrap();
        let mut board = Board::new(size, 2, GameMode::HumanVsHuman);

        let num_moves = usize::arbitrary(g) % (size * size);
        for _ in 0..num_moves {
            if board.game_ended() {
                break;
            }
            // The candidates are never empty while the game is running
            let candidates = board.legal_move_candidates().to_vec();
            let candidate = *g.choose(&candidates).unwrap();
            board.place_disc(candidate.position, None).unwrap();
        }
        ReachableBoard(board)
    }
}

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        // Mostly on the board, sometimes just off it
        let x = (u8::arbitrary(g) % 14) as i32 - 2;
        let y = (u8::arbitrary(g) % 14) as i32 - 2;
        Position { x, y }
    }
}
