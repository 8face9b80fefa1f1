//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the terminal front-end, tests,
//! and diagnostics in text environments.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;
use crate::board::piece_class::PieceClass;
use crate::board::piece_team::PieceTeam;

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 of the grid (Dark's back rank) prints first as rank 8, so the
/// board appears the way the windowed shell draws it.
pub fn render_board(board: &ChessBoard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in 0..board.height() {
        let rank_char = char::from(b'8' - y);
        out.push(rank_char);
        out.push(' ');

        for x in 0..board.width() {
            let glyph = BoardLocation::try_new(x, y)
                .map(|loc| board.get_piece(loc))
                .and_then(piece_glyph);
            match glyph {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if x < board.width() - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_glyph(piece: ChessPiece) -> Option<char> {
    let glyph = match (piece.team(), piece.class()) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
        // Vacant sentinel.
        _ => return None,
    };
    Some(glyph)
}
