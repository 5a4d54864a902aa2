//! Uniform random move picker.
//!
//! Selects uniformly from the candidate moves and is primarily used for
//! integration testing and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::pickers::picker_trait::{CandidateMove, MovePicker};

pub struct RandomPicker;

impl RandomPicker {
    pub fn new() -> Self {
        RandomPicker
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePicker for RandomPicker {
    fn name(&self) -> &str {
        "Janggi Random"
    }

    fn choose_move(&mut self, candidates: &[CandidateMove]) -> Option<CandidateMove> {
        let mut rng = rand::rng();
        candidates.choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::JanggiGame;
    use crate::pickers::picker_trait::enumerate_candidate_moves;
    use crate::piece_team::Team;

    #[test]
    fn picks_from_the_candidate_list() {
        let game = JanggiGame::new();
        let candidates = enumerate_candidate_moves(&game, Team::Blue);
        let mut picker = RandomPicker::new();

        for _ in 0..10 {
            let picked = picker.choose_move(&candidates).unwrap();
            assert!(candidates.contains(&picked));
        }
        assert!(picker.choose_move(&[]).is_none());
    }
}
