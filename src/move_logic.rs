//! Pseudo-legal destination generation for every piece class.
//!
//! Generation accounts for board geometry, blocking, palace confinement, and
//! capture rules, but not for leaving one's own general in check; that
//! cross-cutting rule lives in `game`, because it requires simulating the
//! move.

use crate::board::{Board, Square};
use crate::board_location::BoardLocation;
use crate::piece_class::PieceClass;
use crate::piece_team::Team;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Generate the pseudo-legal destination set of the piece standing on
/// `from`. An empty origin square yields an empty set.
///
/// Every returned destination is in-bounds and not occupied by a same-team
/// piece.
pub fn generate_destinations(board: &Board, from: BoardLocation) -> Vec<BoardLocation> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    let mut result = Vec::new();
    match piece.class {
        PieceClass::General | PieceClass::Guard => {
            destinations_palace_step(board, from, piece.team, &mut result)
        }
        PieceClass::Horse => destinations_horse(board, from, piece.team, &mut result),
        PieceClass::Elephant => destinations_elephant(board, from, piece.team, &mut result),
        PieceClass::Chariot => destinations_chariot(board, from, piece.team, &mut result),
        PieceClass::Cannon => destinations_cannon(board, from, piece.team, &mut result),
        PieceClass::Soldier => destinations_soldier(board, from, piece.team, &mut result),
    }
    result
}

/// Push `(file, rank)` if it is on the board and not same-team-occupied.
fn try_push_step(board: &Board, team: Team, file: i8, rank: i8, out: &mut Vec<BoardLocation>) {
    match board.square_at(file, rank) {
        Square::OutOfBounds => {}
        Square::Empty => out.push(BoardLocation::from_file_rank(file, rank).unwrap()),
        Square::Occupied(target) => {
            if target.team != team {
                out.push(BoardLocation::from_file_rank(file, rank).unwrap());
            }
        }
    }
}

/// General and guard: one step in any of 8 directions, confined to the
/// owner's palace; a diagonal step only from an anchor cell.
fn destinations_palace_step(
    board: &Board,
    from: BoardLocation,
    team: Team,
    out: &mut Vec<BoardLocation>,
) {
    let can_go_diagonal = Board::is_diagonal_anchor(team, from.file(), from.rank());
    for (d_file, d_rank) in ORTHOGONAL.iter().chain(DIAGONAL.iter()) {
        let diagonal = *d_file != 0 && *d_rank != 0;
        if diagonal && !can_go_diagonal {
            continue;
        }
        let (file, rank) = (from.file() + d_file, from.rank() + d_rank);
        if Board::in_palace(team, file, rank) {
            try_push_step(board, team, file, rank, out);
        }
    }
}

/// Horse: one orthogonal step (which must be empty) then one diagonal step
/// continuing outward, two candidates per direction.
fn destinations_horse(board: &Board, from: BoardLocation, team: Team, out: &mut Vec<BoardLocation>) {
    for (d_file, d_rank) in ORTHOGONAL {
        if board.square_at(from.file() + d_file, from.rank() + d_rank) != Square::Empty {
            continue;
        }
        for branch in [-1, 1] {
            let (file, rank) = if d_file == 0 {
                (from.file() + branch, from.rank() + 2 * d_rank)
            } else {
                (from.file() + 2 * d_file, from.rank() + branch)
            };
            try_push_step(board, team, file, rank, out);
        }
    }
}

/// Elephant: one orthogonal step then two diagonal steps outward; both the
/// orthogonal intermediate and the first diagonal intermediate must be empty.
fn destinations_elephant(
    board: &Board,
    from: BoardLocation,
    team: Team,
    out: &mut Vec<BoardLocation>,
) {
    for (d_file, d_rank) in ORTHOGONAL {
        if board.square_at(from.file() + d_file, from.rank() + d_rank) != Square::Empty {
            continue;
        }
        for branch in [-1, 1] {
            // The diagonal direction the path continues along after the
            // orthogonal step.
            let (diag_file, diag_rank) = if d_file == 0 {
                (branch, d_rank)
            } else {
                (d_file, branch)
            };
            let mid_file = from.file() + d_file + diag_file;
            let mid_rank = from.rank() + d_rank + diag_rank;
            if board.square_at(mid_file, mid_rank) != Square::Empty {
                continue;
            }
            try_push_step(board, team, mid_file + diag_file, mid_rank + diag_rank, out);
        }
    }
}

/// Chariot: unlimited orthogonal slides, plus diagonal slides that start on
/// a diagonal-anchor cell of either palace and never leave the palaces.
fn destinations_chariot(
    board: &Board,
    from: BoardLocation,
    team: Team,
    out: &mut Vec<BoardLocation>,
) {
    for (d_file, d_rank) in ORTHOGONAL {
        follow_chariot_ray(board, from, team, d_file, d_rank, false, out);
    }
    if Board::is_any_diagonal_anchor(from.file(), from.rank()) {
        for (d_file, d_rank) in DIAGONAL {
            follow_chariot_ray(board, from, team, d_file, d_rank, true, out);
        }
    }
}

/// Cannon: slides along the same 8 directions as the chariot, but only past
/// exactly one non-cannon screen piece, and never onto a cannon.
fn destinations_cannon(
    board: &Board,
    from: BoardLocation,
    team: Team,
    out: &mut Vec<BoardLocation>,
) {
    for (d_file, d_rank) in ORTHOGONAL {
        follow_cannon_ray(board, from, team, d_file, d_rank, false, out);
    }
    if Board::is_any_diagonal_anchor(from.file(), from.rank()) {
        for (d_file, d_rank) in DIAGONAL {
            follow_cannon_ray(board, from, team, d_file, d_rank, true, out);
        }
    }
}

/// Soldier: one step forward or sideways, never backward, plus diagonal
/// forward steps inside the enemy palace when standing on one of its
/// diagonal-anchor cells.
fn destinations_soldier(
    board: &Board,
    from: BoardLocation,
    team: Team,
    out: &mut Vec<BoardLocation>,
) {
    let forward = team.forward();
    for (d_file, d_rank) in [(0, forward), (-1, 0), (1, 0)] {
        try_push_step(board, team, from.file() + d_file, from.rank() + d_rank, out);
    }

    let enemy = team.opposite();
    if Board::is_diagonal_anchor(enemy, from.file(), from.rank()) {
        for branch in [-1, 1] {
            let (file, rank) = (from.file() + branch, from.rank() + forward);
            if Board::in_palace(enemy, file, rank) {
                try_push_step(board, team, file, rank, out);
            }
        }
    }
}

/// Slide along one direction, stopping at the first occupied cell (included
/// if enemy) or the board edge. Diagonal rays additionally stop at a palace
/// boundary.
fn follow_chariot_ray(
    board: &Board,
    from: BoardLocation,
    team: Team,
    d_file: i8,
    d_rank: i8,
    palace_only: bool,
    out: &mut Vec<BoardLocation>,
) {
    let (mut file, mut rank) = (from.file() + d_file, from.rank() + d_rank);
    loop {
        if palace_only && !Board::in_any_palace(file, rank) {
            return;
        }
        match board.square_at(file, rank) {
            Square::OutOfBounds => return,
            Square::Empty => out.push(BoardLocation::from_file_rank(file, rank).unwrap()),
            Square::Occupied(target) => {
                if target.team != team {
                    out.push(BoardLocation::from_file_rank(file, rank).unwrap());
                }
                return;
            }
        }
        file += d_file;
        rank += d_rank;
    }
}

/// Slide along one direction for a cannon: scan to the screen piece first,
/// then collect the cells past it until something blocks. A cannon screen or
/// a cannon target ends the ray with nothing added.
fn follow_cannon_ray(
    board: &Board,
    from: BoardLocation,
    team: Team,
    d_file: i8,
    d_rank: i8,
    palace_only: bool,
    out: &mut Vec<BoardLocation>,
) {
    let (mut file, mut rank) = (from.file() + d_file, from.rank() + d_rank);
    let mut jumped_screen = false;
    loop {
        if palace_only && !Board::in_any_palace(file, rank) {
            return;
        }
        match board.square_at(file, rank) {
            Square::OutOfBounds => return,
            Square::Empty => {
                if jumped_screen {
                    out.push(BoardLocation::from_file_rank(file, rank).unwrap());
                }
            }
            Square::Occupied(target) => {
                if !jumped_screen {
                    // The screen may be any unit of either team except a cannon.
                    if target.class == PieceClass::Cannon {
                        return;
                    }
                    jumped_screen = true;
                } else {
                    if target.team != team && target.class != PieceClass::Cannon {
                        out.push(BoardLocation::from_file_rank(file, rank).unwrap());
                    }
                    return;
                }
            }
        }
        file += d_file;
        rank += d_rank;
    }
}
