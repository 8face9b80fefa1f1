//! Occupancy helpers and ray walking shared by the per-piece generators.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;

#[inline]
pub fn friendly_piece_on(board: &ChessBoard, piece: &ChessPiece, loc: BoardLocation) -> bool {
    let occupant = board.get_piece(loc);
    occupant.is_valid() && occupant.is_friendly(piece)
}

#[inline]
pub fn enemy_piece_on(board: &ChessBoard, piece: &ChessPiece, loc: BoardLocation) -> bool {
    let occupant = board.get_piece(loc);
    occupant.is_valid() && !occupant.is_friendly(piece)
}

#[inline]
pub fn vacant_on(board: &ChessBoard, loc: BoardLocation) -> bool {
    !board.get_piece(loc).is_valid()
}

/// Extends a ray one square at a time from `from` along `(dx, dy)`.
///
/// Vacant squares are pushed and the walk continues; an enemy-occupied
/// square is pushed and terminates the ray (capture); a friendly-occupied
/// square terminates the ray without being pushed. The board edge also
/// terminates the ray.
pub fn walk_ray(
    board: &ChessBoard,
    piece: &ChessPiece,
    from: BoardLocation,
    dx: i8,
    dy: i8,
    out: &mut Vec<BoardLocation>,
) {
    let mut cursor = from;
    while let Some(next) = cursor.offset(dx, dy) {
        if friendly_piece_on(board, piece, next) {
            break;
        }
        if enemy_piece_on(board, piece, next) {
            out.push(next);
            break;
        }
        out.push(next);
        cursor = next;
    }
}
