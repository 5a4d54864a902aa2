//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view from the board for the stdin shell, tests,
//! and diagnostics. Red pieces render as uppercase two-letter codes, blue as
//! lowercase; rank 1 (the red side) is drawn at the top, matching the
//! coordinate layout of the notation.

use crate::board::{Board, Square};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("    a  b  c  d  e  f  g  h  i\n");
    for rank in 0..Board::HEIGHT {
        out.push_str(&format!("{:>2} ", rank + 1));
        for file in 0..Board::WIDTH {
            match board.square_at(file, rank) {
                Square::Occupied(piece) => {
                    let code = piece.class.code();
                    match piece.team {
                        crate::piece_team::Team::Red => out.push_str(code),
                        crate::piece_team::Team::Blue => out.push_str(&code.to_lowercase()),
                    }
                }
                _ => out.push_str("--"),
            }
            out.push(' ');
        }
        out.push_str(&format!("{:>2}\n", rank + 1));
    }
    out.push_str("    a  b  c  d  e  f  g  h  i");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_sides_and_all_ranks() {
        let rendered = render_board(&Board::opening());
        assert!(rendered.contains("GN"));
        assert!(rendered.contains("gn"));
        assert!(rendered.contains("ca"));
        assert_eq!(rendered.lines().count(), 12);
        assert!(rendered.lines().any(|line| line.starts_with("10 ")));
    }
}
