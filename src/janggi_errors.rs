//! Errors used throughout the Janggi engine.
//!
//! This module defines the canonical rejection type returned by game logic,
//! notation parsing, and move arbitration. The enum `JanggiErrors` is used as
//! the single error type across the crate to simplify propagation and
//! matching. Every variant is a recoverable rejection: `make_move` guarantees
//! the board is restored to its pre-call state on any error, so callers can
//! present a message and re-prompt.
//!
//! Structural invariant violations (for example the cached general location
//! drifting out of sync with the board) are programmer errors and are guarded
//! by debug assertions inside the engine, never surfaced as a variant here.

use crate::board_location::BoardLocation;
use crate::piece_team::Team;

/// Unified rejection type for the Janggi engine.
///
/// Variants carry contextual payloads where useful (the offending location or
/// input string) so callers can log or display precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JanggiErrors {
    /// A referenced coordinate lies outside the 9x10 grid.
    ///
    /// Payload: (file_index, rank_index) zero-based, as supplied.
    OutOfBoundsCoordinate((i8, i8)),

    /// An algebraic coordinate string failed to parse.
    ///
    /// Payload: the original string that could not be interpreted as a
    /// file letter `a`-`i` followed by a rank `1`-`10`.
    InvalidAlgebraicString(String),

    /// The origin square of an attempted move is empty.
    ///
    /// Payload: the empty origin location.
    NoPieceAtOrigin(BoardLocation),

    /// The origin piece does not belong to the side whose turn it is.
    ///
    /// Payload: the origin location holding the wrong-team piece.
    WrongTeamPiece(BoardLocation),

    /// The destination is not in the moving piece's pseudo-legal set.
    /// Also returned for a same-origin "move": passing is a distinct action,
    /// never overloaded onto `make_move`.
    ///
    /// Payload: the rejected destination.
    IllegalDestination(BoardLocation),

    /// The move would leave the mover's own general in check.
    SelfCheckViolation,

    /// The move would leave both generals facing each other on an
    /// unobstructed file.
    GeneralsFacingViolation,

    /// A move, pass, or setup swap was attempted after the game finished.
    GameAlreadyOver,

    /// A pass was attempted while the side to move is in check.
    PassWhileInCheck,

    /// A horse/elephant setup swap was attempted after the pre-game window
    /// closed (an ordinary move was already played, or this side already
    /// used its swap).
    SetupWindowClosed,

    /// A constructed board does not contain a general for the given team.
    ///
    /// This represents an invalid position handed to the engine; ordinary
    /// play can never remove a general from the board.
    BoardMissingGeneral(Team),
}
