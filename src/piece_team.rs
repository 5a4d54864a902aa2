/// Represents the team (side) of a Janggi piece.
/// Red starts on ranks 1-4 and marches toward rank 10; Blue starts on ranks
/// 7-10, marches toward rank 1, and moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Team {
    /// The red side (top of the board in terminal rendering).
    Red,
    /// The blue side (bottom of the board, moves first).
    Blue,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// The rank delta of a forward step for this team's soldiers.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::Red => 1,
            Team::Blue => -1,
        }
    }
}
