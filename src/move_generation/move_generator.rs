//! Candidate move dispatch across piece classes.
//!
//! Maps (piece, location, board) to the ordered sequence of destination
//! squares the piece may move to. No check-safety filtering happens here
//! or anywhere else; a generated move may expose the mover's king.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;
use crate::board::piece_class::PieceClass;
use crate::chess_errors::ChessErrors;
use crate::move_generation::moves_bishop::generate_bishop_moves;
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_queen::generate_queen_moves;
use crate::move_generation::moves_rook::generate_rook_moves;

/// Computes the candidate destinations for `piece` standing on `from`.
///
/// Dispatching on the vacant sentinel fails loudly instead of returning an
/// empty list, so a caller that selects an empty square hears about it.
pub fn get_valid_moves(
    board: &ChessBoard,
    piece: &ChessPiece,
    from: BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    if !piece.is_valid() {
        return Err(ChessErrors::VacantSquareSelected(from));
    }

    let mut out = Vec::new();
    match piece.class() {
        PieceClass::Pawn => generate_pawn_moves(board, piece, from, &mut out),
        PieceClass::Rook => generate_rook_moves(board, piece, from, &mut out),
        PieceClass::Knight => generate_knight_moves(board, piece, from, &mut out),
        PieceClass::Bishop => generate_bishop_moves(board, piece, from, &mut out),
        PieceClass::Queen => generate_queen_moves(board, piece, from, &mut out),
        PieceClass::King => generate_king_moves(board, piece, from, &mut out),
        PieceClass::None => return Err(ChessErrors::VacantSquareSelected(from)),
    }

    Ok(out)
}
