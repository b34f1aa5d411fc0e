//! The one-ply positional heuristic used by the built-in player.
//!
//! Squares are classified by how far they are from the nearest corner:
//! corners are worth a lot, the squares touching a corner (orthogonally along
//! the edge or diagonally) give the corner away and are penalized, and every
//! other square is worth the same small amount. On an 8x8 board this is the
//! classic table over the indices 0, 1, 6 and 7.

use crate::Position;

pub const CORNER_SCORE: i32 = 100;
pub const CORNER_ADJACENT_SCORE: i32 = -100;
pub const ORDINARY_SCORE: i32 = 1;

/// A legal move for the player to move, together with its heuristic score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub position: Position,
    pub score: i32,
}

/// Scores a square on a `size` x `size` board.
pub fn score_position(position: Position, size: usize) -> i32 {
    let last = size as i32 - 1;
    let dx = position.x.min(last - position.x);
    let dy = position.y.min(last - position.y);
    match (dx, dy) {
        (0, 0) => CORNER_SCORE,
        (0..=1, 0..=1) => CORNER_ADJACENT_SCORE,
        _ => ORDINARY_SCORE,
    }
}

/// Picks the highest scoring candidate.
///
/// Ties go to the earliest candidate, so with a cache in row-major order the
/// first square in scan order wins.
pub fn best_candidate(candidates: &[Candidate]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for &candidate in candidates {
        match best {
            Some(top) if top.score >= candidate.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn classic_table_on_8x8() {
        for corner in [pos(0, 0), pos(7, 0), pos(0, 7), pos(7, 7)] {
            assert_eq!(score_position(corner, 8), CORNER_SCORE);
        }
        for x_square in [pos(1, 1), pos(6, 1), pos(1, 6), pos(6, 6)] {
            assert_eq!(score_position(x_square, 8), CORNER_ADJACENT_SCORE);
        }
        for c_square in [pos(1, 0), pos(0, 1), pos(6, 0), pos(7, 1), pos(0, 6), pos(6, 7)] {
            assert_eq!(score_position(c_square, 8), CORNER_ADJACENT_SCORE);
        }
        for ordinary in [pos(2, 0), pos(0, 2), pos(2, 2), pos(3, 4), pos(7, 5), pos(5, 5)] {
            assert_eq!(score_position(ordinary, 8), ORDINARY_SCORE);
        }
    }

    #[test]
    fn generalizes_to_other_sizes() {
        assert_eq!(score_position(pos(9, 9), 10), CORNER_SCORE);
        assert_eq!(score_position(pos(8, 9), 10), CORNER_ADJACENT_SCORE);
        assert_eq!(score_position(pos(7, 9), 10), ORDINARY_SCORE);
        // Every square of a 2x2 board is a corner
        assert_eq!(score_position(pos(1, 0), 2), CORNER_SCORE);
    }

    #[test]
    fn picks_corner_over_everything_else() {
        let candidates = [
            Candidate { position: pos(2, 0), score: score_position(pos(2, 0), 8) },
            Candidate { position: pos(1, 1), score: score_position(pos(1, 1), 8) },
            Candidate { position: pos(7, 7), score: score_position(pos(7, 7), 8) },
            Candidate { position: pos(4, 5), score: score_position(pos(4, 5), 8) },
        ];
        assert_eq!(best_candidate(&candidates).unwrap().position, pos(7, 7));
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let candidates = [
            Candidate { position: pos(2, 3), score: 1 },
            Candidate { position: pos(3, 2), score: 1 },
            Candidate { position: pos(1, 0), score: -100 },
        ];
        assert_eq!(best_candidate(&candidates).unwrap().position, pos(2, 3));
        assert_eq!(best_candidate(&[]), None);
    }
}
