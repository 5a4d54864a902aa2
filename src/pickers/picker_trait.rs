//! Move-picker abstraction layer used by the shell and match harness.
//!
//! Pickers are external collaborators: they consume the public
//! move-generation surface only, and suggest pseudo-legal moves. The caller
//! owns arbitration through `JanggiGame::make_move` and simply retries with
//! a narrowed candidate list when a suggestion is rejected.

use crate::board_location::BoardLocation;
use crate::game::JanggiGame;
use crate::move_logic::generate_destinations;
use crate::piece_record::PieceRecord;
use crate::piece_team::Team;

/// One pseudo-legal move of a team, with the piece it would capture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub captures: Option<PieceRecord>,
}

/// Every pseudo-legal move available to the given team.
pub fn enumerate_candidate_moves(game: &JanggiGame, team: Team) -> Vec<CandidateMove> {
    let board = game.board();
    let mut result = Vec::new();
    for (from, piece) in board.iter_pieces() {
        if piece.team != team {
            continue;
        }
        for to in generate_destinations(board, from) {
            result.push(CandidateMove {
                from,
                to,
                captures: board.piece_at(to),
            });
        }
    }
    result
}

pub trait MovePicker {
    fn name(&self) -> &str;

    /// Suggest one of the candidates, or `None` when the list is empty.
    fn choose_move(&mut self, candidates: &[CandidateMove]) -> Option<CandidateMove>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_candidate_count() {
        let game = JanggiGame::new();
        assert_eq!(enumerate_candidate_moves(&game, Team::Blue).len(), 31);
        assert_eq!(enumerate_candidate_moves(&game, Team::Red).len(), 31);
    }

    #[test]
    fn candidates_report_captures() {
        let game = JanggiGame::new();
        // No piece can be captured from the opening position.
        assert!(enumerate_candidate_moves(&game, Team::Blue)
            .iter()
            .all(|candidate| candidate.captures.is_none()));
    }
}
