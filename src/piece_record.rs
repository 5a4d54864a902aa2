use crate::piece_class::PieceClass;
use crate::piece_team::Team;

/// A piece on the board: its class paired with its team.
/// Plain and copyable; a move relocates the record, it never mutates it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: Team,
}

impl PieceRecord {
    #[inline]
    pub const fn new(class: PieceClass, team: Team) -> Self {
        PieceRecord { class, team }
    }
}
