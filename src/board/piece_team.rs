/// Represents the team (color) of a chess piece.
/// Light starts on the bottom two ranks and moves up the board (toward
/// decreasing y); Dark starts on the top two ranks and moves down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The light (white) side.
    Light,
    /// The dark (black) side.
    Dark,
    /// The owner of a vacant square.
    None,
}

impl PieceTeam {
    /// Signed y step that moves this team's pawns one square forward.
    /// Vacant squares never generate moves; the dispatcher rejects them
    /// before this is consulted.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            PieceTeam::Light => -1,
            PieceTeam::Dark => 1,
            PieceTeam::None => 0,
        }
    }
}
