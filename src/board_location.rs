//! Validated board coordinates and their algebraic notation.
//!
//! Converts between human-readable coordinates (`a1` through `i10`) and the
//! internal zero-based (file, rank) pair. A `BoardLocation` is always
//! in-bounds; raw out-of-grid probes go through `Board::square_at`, which
//! answers with `Square::OutOfBounds` instead of failing.

use std::fmt::Formatter;

use crate::board::Board;
use crate::janggi_errors::JanggiErrors;

/// An in-bounds square coordinate: file `0..=8` (a-i), rank `0..=9` (1-10).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardLocation {
    file: i8,
    rank: i8,
}

impl BoardLocation {
    /// Build a location from zero-based indices, `None` if off the grid.
    #[inline]
    pub fn from_file_rank(file: i8, rank: i8) -> Option<Self> {
        if (0..Board::WIDTH).contains(&file) && (0..Board::HEIGHT).contains(&rank) {
            Some(BoardLocation { file, rank })
        } else {
            None
        }
    }

    /// Parse long algebraic notation, for example `e9` or `i10`.
    ///
    /// A malformed token is `InvalidAlgebraicString`; a well-formed token
    /// that names an off-grid square is `OutOfBoundsCoordinate`.
    pub fn from_algebraic(square: &str) -> Result<Self, JanggiErrors> {
        let bytes = square.as_bytes();
        if bytes.len() < 2 || bytes.len() > 3 || !bytes[0].is_ascii_lowercase() {
            return Err(JanggiErrors::InvalidAlgebraicString(square.to_owned()));
        }
        let rank_number: i8 = square[1..]
            .parse()
            .map_err(|_| JanggiErrors::InvalidAlgebraicString(square.to_owned()))?;

        let file = (bytes[0] as i8) - (b'a' as i8);
        let rank = rank_number - 1;
        Self::from_file_rank(file, rank).ok_or(JanggiErrors::OutOfBoundsCoordinate((file, rank)))
    }

    /// Shift by a (file, rank) delta, `None` if the result leaves the grid.
    #[inline]
    pub fn offset(&self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::from_file_rank(self.file + d_file, self.rank + d_rank)
    }

    #[inline]
    pub const fn file(&self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(&self) -> i8 {
        self.rank
    }

    /// Row-major index into a flat 90-cell square array.
    #[inline]
    pub const fn index(&self) -> usize {
        (self.rank * Board::WIDTH + self.file) as usize
    }
}

impl std::fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_algebraic() -> Result<(), JanggiErrors> {
        let a1 = BoardLocation::from_algebraic("a1")?;
        assert_eq!((a1.file(), a1.rank()), (0, 0));

        let e9 = BoardLocation::from_algebraic("e9")?;
        assert_eq!((e9.file(), e9.rank()), (4, 8));

        let i10 = BoardLocation::from_algebraic("i10")?;
        assert_eq!((i10.file(), i10.rank()), (8, 9));

        assert_eq!(a1.to_string(), "a1");
        assert_eq!(i10.to_string(), "i10");
        Ok(())
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert_eq!(
            BoardLocation::from_algebraic("j5"),
            Err(JanggiErrors::OutOfBoundsCoordinate((9, 4)))
        );
        assert_eq!(
            BoardLocation::from_algebraic("a11"),
            Err(JanggiErrors::OutOfBoundsCoordinate((0, 10)))
        );
        assert_eq!(
            BoardLocation::from_algebraic("e"),
            Err(JanggiErrors::InvalidAlgebraicString("e".to_owned()))
        );
        assert_eq!(
            BoardLocation::from_algebraic("E9"),
            Err(JanggiErrors::InvalidAlgebraicString("E9".to_owned()))
        );
        assert!(BoardLocation::from_file_rank(9, 0).is_none());
        assert!(BoardLocation::from_file_rank(0, 10).is_none());
    }

    #[test]
    fn offset_respects_bounds() {
        let a1 = BoardLocation::from_file_rank(0, 0).unwrap();
        assert!(a1.offset(-1, 0).is_none());
        assert_eq!(a1.offset(1, 2), BoardLocation::from_file_rank(1, 2));
    }
}
