use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;
use crate::move_generation::move_shared::walk_ray;

/// Cardinal ray directions, counter-clockwise from east.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

pub fn generate_rook_moves(
    board: &ChessBoard,
    piece: &ChessPiece,
    from: BoardLocation,
    out: &mut Vec<BoardLocation>,
) {
    for (dx, dy) in ROOK_DIRECTIONS {
        walk_ray(board, piece, from, dx, dy, out);
    }
}
