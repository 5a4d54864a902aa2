//! The 9x10 mailbox board and its static palace geometry.
//!
//! Purely a storage abstraction: squares hold pieces or nothing, and the
//! palace / diagonal-anchor membership tables are exposed as predicates.
//! Move legality lives in `move_logic` and `game`, never here.

use crate::board_location::BoardLocation;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::Team;

/// Three-way answer to a square probe. Boundary and occupancy checks are
/// deliberately the same query so they cannot be confused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Square {
    Empty,
    Occupied(PieceRecord),
    OutOfBounds,
}

/// A total mapping from the 90 valid coordinates to square contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<PieceRecord>; (Board::WIDTH * Board::HEIGHT) as usize],
}

impl Board {
    pub const WIDTH: i8 = 9;
    pub const HEIGHT: i8 = 10;

    pub fn empty() -> Self {
        Board {
            squares: [None; (Board::WIDTH * Board::HEIGHT) as usize],
        }
    }

    /// The fixed Janggi opening placement, 16 pieces per side.
    pub fn opening() -> Self {
        let mut board = Self::empty();

        let back_rank = [
            (0, PieceClass::Chariot),
            (1, PieceClass::Elephant),
            (2, PieceClass::Horse),
            (3, PieceClass::Guard),
            (5, PieceClass::Guard),
            (6, PieceClass::Elephant),
            (7, PieceClass::Horse),
            (8, PieceClass::Chariot),
        ];
        for (team, rank) in [(Team::Red, 0), (Team::Blue, 9)] {
            for (file, class) in back_rank {
                board.place(file, rank, PieceRecord::new(class, team));
            }
        }

        board.place(4, 1, PieceRecord::new(PieceClass::General, Team::Red));
        board.place(4, 8, PieceRecord::new(PieceClass::General, Team::Blue));

        for file in [1, 7] {
            board.place(file, 2, PieceRecord::new(PieceClass::Cannon, Team::Red));
            board.place(file, 7, PieceRecord::new(PieceClass::Cannon, Team::Blue));
        }
        for file in [0, 2, 4, 6, 8] {
            board.place(file, 3, PieceRecord::new(PieceClass::Soldier, Team::Red));
            board.place(file, 6, PieceRecord::new(PieceClass::Soldier, Team::Blue));
        }

        board
    }

    fn place(&mut self, file: i8, rank: i8, piece: PieceRecord) {
        self.squares[(rank * Self::WIDTH + file) as usize] = Some(piece);
    }

    /// Probe any raw coordinate pair; off-grid queries answer `OutOfBounds`.
    #[inline]
    pub fn square_at(&self, file: i8, rank: i8) -> Square {
        match BoardLocation::from_file_rank(file, rank) {
            None => Square::OutOfBounds,
            Some(location) => match self.squares[location.index()] {
                None => Square::Empty,
                Some(piece) => Square::Occupied(piece),
            },
        }
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<PieceRecord> {
        self.squares[location.index()]
    }

    /// Overwrite a square. The engine is responsible for legality.
    #[inline]
    pub fn put(&mut self, location: BoardLocation, content: Option<PieceRecord>) {
        self.squares[location.index()] = content;
    }

    /// Iterate every occupied square with its location.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        self.squares.iter().enumerate().filter_map(|(i, content)| {
            let location = BoardLocation::from_file_rank(
                i as i8 % Self::WIDTH,
                i as i8 / Self::WIDTH,
            )?;
            Some((location, (*content)?))
        })
    }

    /// Membership in the given team's 3x3 palace (files d-f, ranks 1-3 for
    /// red, 8-10 for blue).
    #[inline]
    pub fn in_palace(team: Team, file: i8, rank: i8) -> bool {
        let rank_band = match team {
            Team::Red => 0..=2,
            Team::Blue => 7..=9,
        };
        (3..=5).contains(&file) && rank_band.contains(&rank)
    }

    /// Membership in either palace, for pieces passing through.
    #[inline]
    pub fn in_any_palace(file: i8, rank: i8) -> bool {
        Self::in_palace(Team::Red, file, rank) || Self::in_palace(Team::Blue, file, rank)
    }

    /// True for the palace cells a diagonal move may originate from: the
    /// four corners and the center of the given team's palace.
    #[inline]
    pub fn is_diagonal_anchor(team: Team, file: i8, rank: i8) -> bool {
        if !Self::in_palace(team, file, rank) {
            return false;
        }
        let middle_rank = match team {
            Team::Red => 1,
            Team::Blue => 8,
        };
        // Center cell, or a corner (both coordinates off the palace middle).
        (file == 4) == (rank == middle_rank)
    }

    /// Diagonal-anchor membership for either palace.
    #[inline]
    pub fn is_any_diagonal_anchor(file: i8, rank: i8) -> bool {
        Self::is_diagonal_anchor(Team::Red, file, rank)
            || Self::is_diagonal_anchor(Team::Blue, file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::janggi_errors::JanggiErrors;

    fn at(square: &str) -> BoardLocation {
        BoardLocation::from_algebraic(square).unwrap()
    }

    #[test]
    fn opening_placement() -> Result<(), JanggiErrors> {
        let board = Board::opening();
        assert_eq!(board.iter_pieces().count(), 32);
        assert_eq!(
            board.piece_at(at("e2")),
            Some(PieceRecord::new(PieceClass::General, Team::Red))
        );
        assert_eq!(
            board.piece_at(at("e9")),
            Some(PieceRecord::new(PieceClass::General, Team::Blue))
        );
        assert_eq!(
            board.piece_at(at("b3")),
            Some(PieceRecord::new(PieceClass::Cannon, Team::Red))
        );
        assert_eq!(
            board.piece_at(at("i7")),
            Some(PieceRecord::new(PieceClass::Soldier, Team::Blue))
        );
        assert_eq!(board.piece_at(at("e5")), None);
        Ok(())
    }

    #[test]
    fn square_probe_is_total() {
        let board = Board::opening();
        assert_eq!(board.square_at(-1, 0), Square::OutOfBounds);
        assert_eq!(board.square_at(0, 10), Square::OutOfBounds);
        assert_eq!(board.square_at(4, 4), Square::Empty);
        assert!(matches!(board.square_at(4, 1), Square::Occupied(_)));
    }

    #[test]
    fn palace_membership() {
        assert!(Board::in_palace(Team::Red, 4, 1));
        assert!(Board::in_palace(Team::Red, 3, 0));
        assert!(!Board::in_palace(Team::Red, 4, 3));
        assert!(!Board::in_palace(Team::Red, 2, 1));
        assert!(Board::in_palace(Team::Blue, 5, 9));
        assert!(!Board::in_palace(Team::Blue, 4, 1));
        assert!(Board::in_any_palace(4, 8));
    }

    #[test]
    fn diagonal_anchors_are_corners_and_center() {
        // Red palace: corners d1 f1 d3 f3 plus center e2.
        for (file, rank) in [(3, 0), (5, 0), (3, 2), (5, 2), (4, 1)] {
            assert!(Board::is_diagonal_anchor(Team::Red, file, rank));
        }
        // Edge midpoints are not anchors.
        for (file, rank) in [(4, 0), (3, 1), (5, 1), (4, 2)] {
            assert!(!Board::is_diagonal_anchor(Team::Red, file, rank));
        }
        assert!(Board::is_diagonal_anchor(Team::Blue, 4, 8));
        assert!(!Board::is_diagonal_anchor(Team::Blue, 4, 9));
        assert!(Board::is_any_diagonal_anchor(3, 9));
        assert!(!Board::is_any_diagonal_anchor(0, 0));
    }
}
