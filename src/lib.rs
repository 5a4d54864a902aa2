//! Crate root module declarations for the Janggi rules engine.
//!
//! This file exposes all top-level subsystems (board representation, move
//! generation, game arbitration, move pickers, and utility helpers) so
//! binaries, tests, and external tooling can import stable module paths.

pub mod board;
pub mod board_location;
pub mod game;
pub mod janggi_errors;
pub mod move_logic;
pub mod piece_class;
pub mod piece_record;
pub mod piece_team;

pub mod pickers {
    pub mod picker_greedy;
    pub mod picker_random;
    pub mod picker_trait;
}

pub mod utils {
    pub mod game_record;
    pub mod match_harness;
    pub mod render_board;
}
