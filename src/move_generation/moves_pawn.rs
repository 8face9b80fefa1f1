//! Pawn candidate generation.
//!
//! Direction is forward relative to the pawn's team, resolved once per call
//! from the team's signed step. The double step is gated on the pawn's move
//! counter alone; the jumped-over square is never consulted.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;
use crate::move_generation::move_shared::{enemy_piece_on, vacant_on};

pub fn generate_pawn_moves(
    board: &ChessBoard,
    piece: &ChessPiece,
    from: BoardLocation,
    out: &mut Vec<BoardLocation>,
) {
    let forward = piece.team().forward_step();

    // Forward one: only onto a vacant square.
    if let Some(one_step) = from.offset(0, forward) {
        if vacant_on(board, one_step) {
            out.push(one_step);
        }
    }

    // Forward two: only while the pawn has never moved. The intervening
    // square is not checked.
    if piece.move_count() == 0 {
        if let Some(two_step) = from.offset(0, forward * 2) {
            if vacant_on(board, two_step) {
                out.push(two_step);
            }
        }
    }

    // Diagonal captures: only onto enemy-occupied squares.
    for dx in [-1i8, 1] {
        if let Some(capture) = from.offset(dx, forward) {
            if enemy_piece_on(board, piece, capture) {
                out.push(capture);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::board::board_location::BoardLocation;
    use crate::board::chess_board::ChessBoard;
    use crate::board::chess_piece::ChessPiece;
    use crate::board::piece_class::PieceClass;
    use crate::board::piece_team::PieceTeam;

    fn loc(x: u8, y: u8) -> BoardLocation {
        BoardLocation::new(x, y).expect("test coordinates should be on the board")
    }

    fn moves_for(board: &ChessBoard, from: BoardLocation) -> Vec<BoardLocation> {
        let piece = board.get_piece(from);
        let mut out = Vec::new();
        generate_pawn_moves(board, &piece, from, &mut out);
        out
    }

    #[test]
    fn unmoved_pawn_offers_single_and_double_step() {
        let board = ChessBoard::new();
        assert_eq!(moves_for(&board, loc(4, 6)), vec![loc(4, 5), loc(4, 4)]);
    }

    #[test]
    fn dark_pawns_advance_toward_increasing_y() {
        let board = ChessBoard::new();
        assert_eq!(moves_for(&board, loc(4, 1)), vec![loc(4, 2), loc(4, 3)]);
    }

    #[test]
    fn moved_pawn_loses_the_double_step() {
        let mut board = ChessBoard::new();
        assert!(board.move_piece(loc(4, 6), loc(4, 5)));
        assert_eq!(moves_for(&board, loc(4, 5)), vec![loc(4, 4)]);
    }

    #[test]
    fn blocked_single_step_still_leaves_the_double_step() {
        // The jumped-over square holds an enemy piece; the generator never
        // consults it, so the double step survives.
        let mut board = ChessBoard::new();
        board.place_piece(loc(4, 5), ChessPiece::new(PieceTeam::Dark, PieceClass::Rook));
        assert_eq!(moves_for(&board, loc(4, 6)), vec![loc(4, 4)]);
    }

    #[test]
    fn occupied_double_step_target_is_not_offered() {
        let mut board = ChessBoard::new();
        board.place_piece(loc(4, 4), ChessPiece::new(PieceTeam::Dark, PieceClass::Rook));
        assert_eq!(moves_for(&board, loc(4, 6)), vec![loc(4, 5)]);
    }

    #[test]
    fn diagonals_are_captures_only() {
        let mut board = ChessBoard::new();
        board.place_piece(loc(3, 5), ChessPiece::new(PieceTeam::Dark, PieceClass::Knight));
        board.place_piece(loc(5, 5), ChessPiece::new(PieceTeam::Light, PieceClass::Knight));

        let moves = moves_for(&board, loc(4, 6));
        assert!(moves.contains(&loc(3, 5)));
        assert!(!moves.contains(&loc(5, 5)));
    }

    #[test]
    fn pawn_on_the_last_rank_generates_nothing_forward() {
        let mut board = ChessBoard::empty();
        board.place_piece(loc(2, 0), ChessPiece::new(PieceTeam::Light, PieceClass::Pawn));
        assert!(moves_for(&board, loc(2, 0)).is_empty());
    }
}
