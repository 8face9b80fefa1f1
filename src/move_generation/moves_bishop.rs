use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;
use crate::move_generation::move_shared::walk_ray;

/// Diagonal ray directions, counter-clockwise from north-east.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (-1, -1), (-1, 1), (1, 1)];

pub fn generate_bishop_moves(
    board: &ChessBoard,
    piece: &ChessPiece,
    from: BoardLocation,
    out: &mut Vec<BoardLocation>,
) {
    for (dx, dy) in BISHOP_DIRECTIONS {
        walk_ray(board, piece, from, dx, dy, out);
    }
}
