use std::io::{self, BufRead, Write};

use janggi::game::{GameStatus, JanggiGame};
use janggi::pickers::picker_greedy::GreedyPicker;
use janggi::pickers::picker_trait::{enumerate_candidate_moves, MovePicker};
use janggi::utils::game_record::apply_action_token;
use janggi::utils::render_board::render_board;

/// Thin terminal shell over the engine. Commands:
/// two squares ("a7 a6"), "pass", "swap left|right|both|neither",
/// "ai" (greedy move for the side to move), "quit".
fn main() {
    let mut game = JanggiGame::new();
    let mut greedy = GreedyPicker::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render_board(game.board()));
        match game.status() {
            GameStatus::Won(team) => {
                println!("{team:?} wins by checkmate");
                return;
            }
            GameStatus::InProgress => {}
        }

        print!("{:?}> ", game.turn());
        io::stdout().flush().ok();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return,
        };
        let input = line.trim().to_ascii_lowercase();
        let parts: Vec<&str> = input.split_ascii_whitespace().collect();

        let result = match parts.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => return,
            ["pass"] => apply_action_token(&mut game, "pass"),
            ["swap", choice] => apply_action_token(&mut game, &format!("swap:{choice}")),
            ["ai"] => play_greedy_move(&mut game, &mut greedy),
            [from, to] => game.make_move_algebraic(from, to).map(|outcome| {
                if outcome.opponent_in_check {
                    println!("check!");
                }
            }),
            _ => {
                println!("unrecognized command: {input}");
                continue;
            }
        };

        if let Err(rejection) = result {
            println!("rejected: {rejection:?}");
        }
    }
}

/// Ask the greedy picker for a suggestion, retrying with a narrowed
/// candidate list until the engine accepts one.
fn play_greedy_move(
    game: &mut JanggiGame,
    picker: &mut GreedyPicker,
) -> Result<(), janggi::janggi_errors::JanggiErrors> {
    let mut candidates = enumerate_candidate_moves(game, game.turn());
    while let Some(candidate) = picker.choose_move(&candidates) {
        match game.make_move(candidate.from, candidate.to) {
            Ok(_) => {
                println!("played {}{}", candidate.from, candidate.to);
                return Ok(());
            }
            Err(_) => candidates.retain(|c| c != &candidate),
        }
    }
    // No playable move: pass if legal (a checkmate would already have
    // finished the game on the opponent's move).
    game.pass_turn()?;
    println!("played pass");
    Ok(())
}
