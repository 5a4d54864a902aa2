//! The Janggi game engine: turn order, move arbitration, check and
//! checkmate detection, and the facing-generals rule.
//!
//! `make_move` validates against the pseudo-legal destination set, then
//! tentatively applies the move and verifies the resulting position. Both
//! the verification step and the checkmate search use an explicit
//! reversible-command pattern: applying a relocation returns exactly the
//! information needed to construct its inverse, so a rejected or simulated
//! move always restores the board bit for bit.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::janggi_errors::JanggiErrors;
use crate::move_logic::generate_destinations;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::Team;

/// Terminal state of a game. The only transition is
/// `InProgress -> Won(team)`, fired from inside `make_move`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Team),
}

/// Which side(s) of the back rank a pre-game setup swap exchanges the horse
/// and elephant on. `Neither` still consumes the turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SetupSwap {
    Neither,
    Left,
    Right,
    Both,
}

/// What a committed move did, reported back to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub captured: Option<PieceRecord>,
    pub opponent_in_check: bool,
    pub status: GameStatus,
}

/// The inverse-command record of one relocation: enough to restore the
/// destination content, the origin, and the general-location cache.
struct MoveRecord {
    from: BoardLocation,
    to: BoardLocation,
    moved: PieceRecord,
    captured: Option<PieceRecord>,
    prior_general_location: Option<BoardLocation>,
}

/// A full game of Janggi. Single-threaded by design: every public operation
/// requires exclusive access for its whole duration, because checkmate
/// search and move verification mutate and then restore the board in place.
#[derive(Clone, Debug)]
pub struct JanggiGame {
    board: Board,
    turn: Team,
    status: GameStatus,
    general_locations: [BoardLocation; 2],
    ordinary_move_played: bool,
    setup_swap_used: [bool; 2],
}

impl JanggiGame {
    /// A fresh game at the fixed opening placement. Blue moves first.
    pub fn new() -> Self {
        let board = Board::opening();
        let general_locations = Self::locate_generals(&board)
            .expect("opening placement always contains both generals");
        JanggiGame {
            board,
            turn: Team::Blue,
            status: GameStatus::InProgress,
            general_locations,
            ordinary_move_played: false,
            setup_swap_used: [false, false],
        }
    }

    /// Adopt an arbitrary constructed position. The board must hold exactly
    /// one general per team; the pre-game setup-swap window is treated as
    /// closed.
    pub fn from_board(board: Board, turn: Team) -> Result<Self, JanggiErrors> {
        let general_locations = Self::locate_generals(&board)?;
        Ok(JanggiGame {
            board,
            turn,
            status: GameStatus::InProgress,
            general_locations,
            ordinary_move_played: true,
            setup_swap_used: [true, true],
        })
    }

    fn locate_generals(board: &Board) -> Result<[BoardLocation; 2], JanggiErrors> {
        let mut found = [None; 2];
        for (location, piece) in board.iter_pieces() {
            if piece.class == PieceClass::General {
                found[piece.team.index()] = Some(location);
            }
        }
        Ok([
            found[Team::Red.index()].ok_or(JanggiErrors::BoardMissingGeneral(Team::Red))?,
            found[Team::Blue.index()].ok_or(JanggiErrors::BoardMissingGeneral(Team::Blue))?,
        ])
    }

    /// Read-only view of all 90 squares, for renderers and pickers.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Team {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Where the given team's general currently stands.
    #[inline]
    pub fn general_location(&self, team: Team) -> BoardLocation {
        self.general_locations[team.index()]
    }

    /// Validate and apply a move, or reject it with the board untouched.
    pub fn make_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<MoveOutcome, JanggiErrors> {
        if self.status != GameStatus::InProgress {
            return Err(JanggiErrors::GameAlreadyOver);
        }
        if from == to {
            return Err(JanggiErrors::IllegalDestination(to));
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(JanggiErrors::NoPieceAtOrigin(from))?;
        if piece.team != self.turn {
            return Err(JanggiErrors::WrongTeamPiece(from));
        }
        if !generate_destinations(&self.board, from).contains(&to) {
            return Err(JanggiErrors::IllegalDestination(to));
        }

        // Tentatively apply, then verify the resulting position.
        let mover = self.turn;
        let record = self.apply_relocation(from, to, piece);
        if self.is_in_check(mover) {
            self.revert_relocation(record);
            return Err(JanggiErrors::SelfCheckViolation);
        }
        if self.are_generals_facing() {
            self.revert_relocation(record);
            return Err(JanggiErrors::GeneralsFacingViolation);
        }

        // Committed.
        self.ordinary_move_played = true;
        let opponent = mover.opposite();
        let opponent_in_check = self.is_in_check(opponent);
        if opponent_in_check && self.is_in_checkmate(opponent) {
            self.status = GameStatus::Won(mover);
        } else {
            self.turn = opponent;
        }
        Ok(MoveOutcome {
            captured: record.captured,
            opponent_in_check,
            status: self.status,
        })
    }

    /// `make_move` with both coordinates in algebraic notation.
    pub fn make_move_algebraic(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<MoveOutcome, JanggiErrors> {
        let from = BoardLocation::from_algebraic(from)?;
        let to = BoardLocation::from_algebraic(to)?;
        self.make_move(from, to)
    }

    /// Give up the move. Only legal while not in check.
    pub fn pass_turn(&mut self) -> Result<(), JanggiErrors> {
        if self.status != GameStatus::InProgress {
            return Err(JanggiErrors::GameAlreadyOver);
        }
        if self.is_in_check(self.turn) {
            return Err(JanggiErrors::PassWhileInCheck);
        }
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// The optional pre-game setup action: exchange the horse and elephant
    /// on the chosen side(s) of the mover's back rank. Allowed at most once
    /// per side, only before the first ordinary move, and consumes the turn.
    pub fn swap_horse_elephant(&mut self, swap: SetupSwap) -> Result<(), JanggiErrors> {
        if self.status != GameStatus::InProgress {
            return Err(JanggiErrors::GameAlreadyOver);
        }
        if self.ordinary_move_played || self.setup_swap_used[self.turn.index()] {
            return Err(JanggiErrors::SetupWindowClosed);
        }

        let back_rank = match self.turn {
            Team::Red => 0,
            Team::Blue => 9,
        };
        let sides: &[(i8, i8)] = match swap {
            SetupSwap::Neither => &[],
            SetupSwap::Left => &[(1, 2)],
            SetupSwap::Right => &[(6, 7)],
            SetupSwap::Both => &[(1, 2), (6, 7)],
        };
        for (file_a, file_b) in sides {
            let a = BoardLocation::from_file_rank(*file_a, back_rank).unwrap();
            let b = BoardLocation::from_file_rank(*file_b, back_rank).unwrap();
            let content_a = self.board.piece_at(a);
            self.board.put(a, self.board.piece_at(b));
            self.board.put(b, content_a);
        }

        self.setup_swap_used[self.turn.index()] = true;
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// True if any enemy piece's pseudo-legal destination set covers the
    /// given team's general.
    pub fn is_in_check(&self, team: Team) -> bool {
        let general = self.general_locations[team.index()];
        self.board
            .iter_pieces()
            .filter(|(_, piece)| piece.team != team)
            .any(|(location, _)| generate_destinations(&self.board, location).contains(&general))
    }

    /// Exhaustive simulate-and-rollback search: true only if every
    /// pseudo-legal move of the given team still leaves it in check.
    pub fn is_in_checkmate(&mut self, team: Team) -> bool {
        let own_pieces: Vec<(BoardLocation, PieceRecord)> = self
            .board
            .iter_pieces()
            .filter(|(_, piece)| piece.team == team)
            .collect();

        for (from, piece) in own_pieces {
            for to in generate_destinations(&self.board, from) {
                let record = self.apply_relocation(from, to, piece);
                let still_in_check = self.is_in_check(team);
                self.revert_relocation(record);
                if !still_in_check {
                    return false;
                }
            }
        }
        true
    }

    /// True only if both generals share a file with no piece between them.
    pub fn are_generals_facing(&self) -> bool {
        let red = self.general_locations[Team::Red.index()];
        let blue = self.general_locations[Team::Blue.index()];
        if red.file() != blue.file() {
            return false;
        }
        let low = red.rank().min(blue.rank());
        let high = red.rank().max(blue.rank());
        for rank in (low + 1)..high {
            let location = BoardLocation::from_file_rank(red.file(), rank).unwrap();
            if self.board.piece_at(location).is_some() {
                return false;
            }
        }
        true
    }

    /// Relocate `moved` from `from` to `to`, returning the record that
    /// reverses it exactly.
    fn apply_relocation(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        moved: PieceRecord,
    ) -> MoveRecord {
        let captured = self.board.piece_at(to);
        self.board.put(to, Some(moved));
        self.board.put(from, None);

        let prior_general_location = if moved.class == PieceClass::General {
            let index = moved.team.index();
            let prior = self.general_locations[index];
            self.general_locations[index] = to;
            Some(prior)
        } else {
            None
        };

        MoveRecord {
            from,
            to,
            moved,
            captured,
            prior_general_location,
        }
    }

    /// Undo a relocation, restoring squares and the general-location cache.
    fn revert_relocation(&mut self, record: MoveRecord) {
        self.board.put(record.from, Some(record.moved));
        self.board.put(record.to, record.captured);
        if let Some(prior) = record.prior_general_location {
            self.general_locations[record.moved.team.index()] = prior;
        }
        debug_assert_eq!(
            self.board
                .piece_at(self.general_locations[record.moved.team.index()])
                .map(|piece| piece.class),
            Some(PieceClass::General)
        );
    }
}

impl Default for JanggiGame {
    fn default() -> Self {
        Self::new()
    }
}
