/// Represents the type (class) of a Janggi piece.
/// The seven classes are a closed set; movement rules dispatch on this enum
/// rather than living on the pieces themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    /// The general. Confined to its palace; the game is won by checkmating it.
    General,
    /// A guard. Moves like the general, confined to its palace.
    Guard,
    /// A horse. One orthogonal step then one diagonal step outward; blockable.
    Horse,
    /// An elephant. One orthogonal step then two diagonal steps outward; blockable.
    Elephant,
    /// A chariot. Slides orthogonally, plus palace diagonals from anchor cells.
    Chariot,
    /// A cannon. Slides like a chariot but must jump exactly one non-cannon
    /// screen piece, and may never capture a cannon.
    Cannon,
    /// A soldier. Steps forward or sideways, never backward; no promotion.
    Soldier,
}

impl PieceClass {
    /// Two-letter display code used by the terminal renderer.
    pub const fn code(self) -> &'static str {
        match self {
            PieceClass::General => "GN",
            PieceClass::Guard => "GD",
            PieceClass::Horse => "HS",
            PieceClass::Elephant => "EL",
            PieceClass::Chariot => "CH",
            PieceClass::Cannon => "CA",
            PieceClass::Soldier => "SD",
        }
    }
}
