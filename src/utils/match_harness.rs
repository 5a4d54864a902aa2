//! Minimal head-to-head picker match harness for local testing.
//!
//! Runs two `MovePicker` implementations against each other without any
//! I/O. Pickers suggest pseudo-legal moves only, so the harness owns the
//! retry loop: a rejected suggestion is removed from the candidate list and
//! the picker is asked again. When nothing is playable and the side is not
//! in check, the turn is passed.

use crate::game::{GameStatus, JanggiGame};
use crate::janggi_errors::JanggiErrors;
use crate::pickers::picker_trait::{enumerate_candidate_moves, MovePicker};
use crate::piece_team::Team;
use crate::utils::game_record::move_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WinCheckmate(Team),
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig { max_plies: 200 }
    }
}

#[derive(Debug)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub action_tokens: Vec<String>,
    pub final_game: JanggiGame,
}

pub fn run_match(
    red_picker: &mut dyn MovePicker,
    blue_picker: &mut dyn MovePicker,
    config: &MatchConfig,
) -> Result<MatchResult, JanggiErrors> {
    let mut game = JanggiGame::new();
    let mut action_tokens = Vec::new();

    for _ in 0..config.max_plies {
        if game.status() != GameStatus::InProgress {
            break;
        }
        let team = game.turn();
        let picker: &mut dyn MovePicker = match team {
            Team::Red => &mut *red_picker,
            Team::Blue => &mut *blue_picker,
        };

        let mut candidates = enumerate_candidate_moves(&game, team);
        let mut played = false;
        while let Some(candidate) = picker.choose_move(&candidates) {
            match game.make_move(candidate.from, candidate.to) {
                Ok(_) => {
                    action_tokens.push(move_token(candidate.from, candidate.to));
                    played = true;
                    break;
                }
                Err(_) => {
                    candidates.retain(|c| c != &candidate);
                }
            }
        }
        if !played && game.status() == GameStatus::InProgress {
            // Nothing playable: passing is the only action left, and it is
            // legal exactly when the side is not in check.
            game.pass_turn()?;
            action_tokens.push("pass".to_owned());
        }
    }

    let outcome = match game.status() {
        GameStatus::Won(team) => MatchOutcome::WinCheckmate(team),
        GameStatus::InProgress => MatchOutcome::DrawMaxPlies,
    };
    Ok(MatchResult {
        outcome,
        action_tokens,
        final_game: game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_class::PieceClass;
    use crate::pickers::picker_greedy::GreedyPicker;
    use crate::pickers::picker_random::RandomPicker;
    use crate::utils::game_record::{replay_game_record, write_game_record};

    #[test]
    fn greedy_versus_random_stays_consistent() -> Result<(), JanggiErrors> {
        let mut greedy = GreedyPicker::new();
        let mut random = RandomPicker::new();
        let config = MatchConfig { max_plies: 60 };

        let result = run_match(&mut greedy, &mut random, &config)?;
        assert!(!result.action_tokens.is_empty());

        // The general-location cache must still agree with the board.
        let game = &result.final_game;
        for team in [Team::Red, Team::Blue] {
            let cached = game.general_location(team);
            let scanned = game
                .board()
                .iter_pieces()
                .find(|(_, piece)| piece.class == PieceClass::General && piece.team == team)
                .map(|(location, _)| location);
            assert_eq!(scanned, Some(cached));
        }
        Ok(())
    }

    #[test]
    fn match_transcript_replays_cleanly() -> Result<(), JanggiErrors> {
        let mut red = RandomPicker::new();
        let mut blue = RandomPicker::new();
        let config = MatchConfig { max_plies: 40 };

        let result = run_match(&mut red, &mut blue, &config)?;
        let record = write_game_record(&result.action_tokens, result.final_game.status());
        let replayed = replay_game_record(&record)?;
        assert_eq!(replayed.board(), result.final_game.board());
        assert_eq!(replayed.status(), result.final_game.status());
        Ok(())
    }
}
