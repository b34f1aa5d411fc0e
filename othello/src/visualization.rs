use crate::{Board, SquareState};

/// Draws the board as a box of discs.
///
/// Columns and rows are labeled 1-indexed. `●` is player 0, `○` is player 1,
/// further players are shown by their id, and `·` marks the legal moves of
/// the player to move.
pub fn visualize_board(board: &Board) -> String {
    let size = board.size();
    let candidates = board.legal_move_candidates();

    // Draw the top of the box
    let mut result = String::from("    ");
    for x in 1..=size {
        result += &format!("{:>2}", x);
    }
    result += "\n    ╭";
    for _ in 0..size {
        result += "──";
    }
    result += "─╮";

    for (position, square) in board.squares() {
        if position.x == 0 {
            result += &format!("\n{:>3} │", position.y + 1);
        }
        let glyph = match square {
            SquareState::Occupied(0) => String::from("●"),
            SquareState::Occupied(1) => String::from("○"),
            SquareState::Occupied(player) => player.to_string(),
            SquareState::Empty if candidates.iter().any(|c| c.position == position) => {
                String::from("·")
            }
            SquareState::Empty => String::from(" "),
        };
        result += " ";
        result += &glyph;
        if position.x as usize == size - 1 {
            result += " │";
        }
    }

    // Draw the bottom of the box
    result += "\n    ╰";
    for _ in 0..size {
        result += "──";
    }
    result += "─╯\n";

    if board.game_ended() {
        let counts: Vec<String> = board.disc_counts().iter().map(|c| c.to_string()).collect();
        result += &format!("Game over: {}", counts.join(" - "));
    } else {
        result += &format!(
            "Next player: {} {}",
            board.current_player(),
            player_glyph(board.current_player())
        );
    }
    result
}

fn player_glyph(player: usize) -> String {
    match player {
        0 => String::from("●"),
        1 => String::from("○"),
        _ => player.to_string(),
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;

    #[test]
    fn draws_opening_on_4x4() {
        let board = Board::new(4, 2, GameMode::HumanVsHuman);
        let expected = [
            "     1 2 3 4",
            "    ╭─────────╮",
            "  1 │   ·     │",
            "  2 │ · ○ ●   │",
            "  3 │   ● ○ · │",
            "  4 │     ·   │",
            "    ╰─────────╯",
            "Next player: 0 ●",
        ]
        .join("\n");
        assert_eq!(visualize_board(&board), expected);
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn reports_game_over() {
        let board = Board::from_layout("01\n00", 0, GameMode::HumanVsHuman).unwrap();
        assert!(board.game_ended());
        assert!(visualize_board(&board).ends_with("Game over: 3 - 1"));
    }

    #[test]
    fn further_players_are_drawn_by_their_id() {
        let board = Board::from_layout("29\n..", 0, GameMode::HumanVsHuman).unwrap();
        assert_eq!(board.player_number(), 10);
        assert!(visualize_board(&board).contains("  1 │ 2 9 │"));
    }
}
