//! One-ply greedy move picker.
//!
//! Prefers the capture of highest material value; with no capture available
//! (or on ties) it falls back to a uniform random choice. This is the whole
//! of the computer opponent: no deeper search is wanted here.

use rand::prelude::IndexedRandom;

use crate::piece_class::PieceClass;
use crate::pickers::picker_trait::{CandidateMove, MovePicker};

pub struct GreedyPicker;

impl GreedyPicker {
    pub fn new() -> Self {
        GreedyPicker
    }

    /// Material ordering: General > Chariot > Horse = Elephant = Cannon >
    /// Guard > Soldier.
    #[inline]
    fn piece_value(class: PieceClass) -> i32 {
        match class {
            PieceClass::Soldier => 100,
            PieceClass::Guard => 300,
            PieceClass::Horse => 500,
            PieceClass::Elephant => 500,
            PieceClass::Cannon => 500,
            PieceClass::Chariot => 900,
            PieceClass::General => 20000,
        }
    }
}

impl Default for GreedyPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePicker for GreedyPicker {
    fn name(&self) -> &str {
        "Janggi Greedy"
    }

    fn choose_move(&mut self, candidates: &[CandidateMove]) -> Option<CandidateMove> {
        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for candidate in candidates {
            let capture_value = match candidate.captures {
                Some(target) => Self::piece_value(target.class),
                None => 0,
            };
            if capture_value > best_value {
                best_value = capture_value;
                best_moves.clear();
                best_moves.push(*candidate);
            } else if capture_value == best_value {
                best_moves.push(*candidate);
            }
        }

        let mut rng = rand::rng();
        best_moves.as_slice().choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::board_location::BoardLocation;
    use crate::game::JanggiGame;
    use crate::janggi_errors::JanggiErrors;
    use crate::pickers::picker_trait::enumerate_candidate_moves;
    use crate::piece_record::PieceRecord;
    use crate::piece_team::Team;

    fn at(square: &str) -> BoardLocation {
        BoardLocation::from_algebraic(square).unwrap()
    }

    #[test]
    fn prefers_the_most_valuable_capture() -> Result<(), JanggiErrors> {
        // The red chariot may take a soldier or a horse; greedy takes the horse.
        let mut board = Board::empty();
        board.put(at("e2"), Some(PieceRecord::new(PieceClass::General, Team::Red)));
        board.put(at("d9"), Some(PieceRecord::new(PieceClass::General, Team::Blue)));
        board.put(at("a1"), Some(PieceRecord::new(PieceClass::Chariot, Team::Red)));
        board.put(at("a5"), Some(PieceRecord::new(PieceClass::Horse, Team::Blue)));
        board.put(at("b1"), Some(PieceRecord::new(PieceClass::Soldier, Team::Blue)));
        let game = JanggiGame::from_board(board, Team::Red)?;

        let candidates = enumerate_candidate_moves(&game, Team::Red);
        let mut picker = GreedyPicker::new();
        let picked = picker.choose_move(&candidates).unwrap();
        assert_eq!(picked.from, at("a1"));
        assert_eq!(picked.to, at("a5"));
        assert_eq!(picked.captures.map(|piece| piece.class), Some(PieceClass::Horse));
        Ok(())
    }

    #[test]
    fn quiet_positions_fall_back_to_any_move() {
        let game = JanggiGame::new();
        let candidates = enumerate_candidate_moves(&game, Team::Blue);
        let mut picker = GreedyPicker::new();
        let picked = picker.choose_move(&candidates).unwrap();
        assert!(candidates.contains(&picked));
        assert!(picked.captures.is_none());
    }
}
