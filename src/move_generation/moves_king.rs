use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_piece::ChessPiece;
use crate::move_generation::move_shared::friendly_piece_on;

/// Adjacent-square offsets, counter-clockwise from east.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn generate_king_moves(
    board: &ChessBoard,
    piece: &ChessPiece,
    from: BoardLocation,
    out: &mut Vec<BoardLocation>,
) {
    for (dx, dy) in KING_OFFSETS {
        if let Some(to) = from.offset(dx, dy) {
            if !friendly_piece_on(board, piece, to) {
                out.push(to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
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
        generate_king_moves(board, &piece, from, &mut out);
        out
    }

    #[test]
    fn a_king_surrounded_by_friends_cannot_move() {
        let board = ChessBoard::new();
        assert!(moves_for(&board, loc(4, 7)).is_empty());
    }

    #[test]
    fn a_centered_king_reaches_all_eight_neighbours() {
        let mut board = ChessBoard::empty();
        board.place_piece(loc(4, 4), ChessPiece::new(PieceTeam::Dark, PieceClass::King));
        assert_eq!(moves_for(&board, loc(4, 4)).len(), 8);
    }

    #[test]
    fn corner_king_is_clipped_to_the_board() {
        let mut board = ChessBoard::empty();
        board.place_piece(loc(0, 0), ChessPiece::new(PieceTeam::Light, PieceClass::King));

        let moves = moves_for(&board, loc(0, 0));
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&loc(1, 0)));
        assert!(moves.contains(&loc(0, 1)));
        assert!(moves.contains(&loc(1, 1)));
    }

    #[test]
    fn enemy_neighbours_are_capture_targets() {
        let mut board = ChessBoard::empty();
        board.place_piece(loc(4, 4), ChessPiece::new(PieceTeam::Light, PieceClass::King));
        board.place_piece(loc(4, 3), ChessPiece::new(PieceTeam::Dark, PieceClass::Pawn));
        board.place_piece(loc(5, 4), ChessPiece::new(PieceTeam::Light, PieceClass::Pawn));

        let moves = moves_for(&board, loc(4, 4));
        assert!(moves.contains(&loc(4, 3)));
        assert!(!moves.contains(&loc(5, 4)));
        assert_eq!(moves.len(), 7);
    }
}
