use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;
use crate::move_generation::move_shared::friendly_piece_on;

pub fn generate_knight_moves(
    board: &ChessBoard,
    piece: &ChessPiece,
    from: BoardLocation,
    out: &mut Vec<BoardLocation>,
) {
    // The long component carries the team-relative step. The offset set is
    // symmetric, so the flip does not change the squares reached.
    let long = 2 * piece.team().forward_step();

    let offsets = [
        (1, long),
        (-1, long),
        (1, -long),
        (-1, -long),
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
    ];

    for (dx, dy) in offsets {
        if let Some(to) = from.offset(dx, dy) {
            if !friendly_piece_on(board, piece, to) {
                out.push(to);
            }
        }
    }
}
