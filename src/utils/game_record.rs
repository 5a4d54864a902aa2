//! Game transcript read/write utilities.
//!
//! Serializes a finished or in-progress game's action history to a headed
//! movetext block, and replays a transcript back through `make_move` so
//! every recorded action is re-validated by the engine. The action alphabet
//! covers ordinary moves (`a7a6`), `pass`, and the pre-game setup swap
//! (`swap:left` and friends).

use std::collections::BTreeMap;

use crate::board_location::BoardLocation;
use crate::game::{GameStatus, JanggiGame, SetupSwap};
use crate::janggi_errors::JanggiErrors;
use crate::piece_team::Team;

/// Token for an ordinary move, for example `a7a6` or `e9e10`.
pub fn move_token(from: BoardLocation, to: BoardLocation) -> String {
    format!("{from}{to}")
}

fn result_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "*",
        GameStatus::Won(Team::Red) => "red-won",
        GameStatus::Won(Team::Blue) => "blue-won",
    }
}

/// Write a transcript with a header block and numbered movetext.
pub fn write_game_record(action_tokens: &[String], status: GameStatus) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Janggi Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Red".to_owned(), "Red".to_owned());
    headers.insert("Blue".to_owned(), "Blue".to_owned());
    headers.insert("Result".to_owned(), result_token(status).to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(action_tokens.len() + 1);
    for (ply, token) in action_tokens.iter().enumerate() {
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, token));
        } else {
            movetext_parts.push(token.clone());
        }
    }
    movetext_parts.push(result_token(status).to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Replay a transcript from the opening position, re-validating every
/// action through the engine. Returns the resulting game.
pub fn replay_game_record(text: &str) -> Result<JanggiGame, JanggiErrors> {
    let mut game = JanggiGame::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('[') {
            continue;
        }
        for token in line.split_ascii_whitespace() {
            // Skip move numbers and result markers.
            if token.ends_with('.') || token == "*" || token.contains('-') {
                continue;
            }
            apply_action_token(&mut game, token)?;
        }
    }
    Ok(game)
}

/// Apply one movetext token to a live game.
pub fn apply_action_token(game: &mut JanggiGame, token: &str) -> Result<(), JanggiErrors> {
    if token == "pass" {
        return game.pass_turn();
    }
    if let Some(choice) = token.strip_prefix("swap:") {
        let swap = match choice {
            "neither" => SetupSwap::Neither,
            "left" => SetupSwap::Left,
            "right" => SetupSwap::Right,
            "both" => SetupSwap::Both,
            _ => return Err(JanggiErrors::InvalidAlgebraicString(token.to_owned())),
        };
        return game.swap_horse_elephant(swap);
    }

    let (from, to) = split_move_token(token)?;
    game.make_move(from, to).map(|_| ())
}

/// Split a concatenated square pair on the second file letter, so that
/// two-digit ranks (`e9e10`) parse unambiguously.
fn split_move_token(token: &str) -> Result<(BoardLocation, BoardLocation), JanggiErrors> {
    let split = token
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .ok_or_else(|| JanggiErrors::InvalidAlgebraicString(token.to_owned()))?;
    let from = BoardLocation::from_algebraic(&token[..split])?;
    let to = BoardLocation::from_algebraic(&token[split..])?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_digit_ranks() -> Result<(), JanggiErrors> {
        let (from, to) = split_move_token("e9e10")?;
        assert_eq!(from.to_string(), "e9");
        assert_eq!(to.to_string(), "e10");

        let (from, to) = split_move_token("a10a9")?;
        assert_eq!(from.to_string(), "a10");
        assert_eq!(to.to_string(), "a9");

        assert!(split_move_token("a7").is_err());
        Ok(())
    }

    #[test]
    fn transcript_round_trip() -> Result<(), JanggiErrors> {
        let tokens = vec![
            "swap:left".to_owned(),
            "pass".to_owned(),
            "a7a6".to_owned(),
            "c1d3".to_owned(),
        ];

        let mut expected = JanggiGame::new();
        for token in &tokens {
            apply_action_token(&mut expected, token)?;
        }

        let record = write_game_record(&tokens, expected.status());
        assert!(record.contains("[Event \"Janggi Game\"]"));
        assert!(record.contains("1. swap:left pass 2. a7a6 c1d3 *"));

        let replayed = replay_game_record(&record)?;
        assert_eq!(replayed.board(), expected.board());
        assert_eq!(replayed.turn(), expected.turn());
        assert_eq!(replayed.status(), expected.status());
        Ok(())
    }

    #[test]
    fn replay_rejects_illegal_transcripts() {
        let record = "1. a7a5 *\n";
        assert!(replay_game_record(record).is_err());
    }
}
