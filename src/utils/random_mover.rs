//! Uniformly random move selection over one side's pieces.
//!
//! A trivial reference mover: it scans the board for the requested team,
//! pools every generated candidate, and picks one at random. Useful for
//! exercising the engine from the front-end and in tests without any
//! search or evaluation.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::board::piece_team::PieceTeam;
use crate::chess_errors::ChessErrors;
use crate::move_generation::move_generator::get_valid_moves;

/// Every (from, to) candidate pair for the given team, in board scan order.
pub fn collect_team_moves(
    board: &ChessBoard,
    team: PieceTeam,
) -> Result<Vec<(BoardLocation, BoardLocation)>, ChessErrors> {
    let mut all = Vec::new();

    for y in 0..board.height() {
        for x in 0..board.width() {
            let Some(from) = BoardLocation::try_new(x, y) else {
                continue;
            };
            let piece = board.get_piece(from);
            if !piece.is_valid() || piece.team() != team {
                continue;
            }

            let destinations = get_valid_moves(board, &piece, from)?;
            all.extend(destinations.into_iter().map(|to| (from, to)));
        }
    }

    Ok(all)
}

/// Pick a random candidate move for the given team.
pub fn pick_random_move<R: Rng>(
    board: &ChessBoard,
    team: PieceTeam,
    rng: &mut R,
) -> Result<(BoardLocation, BoardLocation), ChessErrors> {
    let moves = collect_team_moves(board, team)?;
    moves.choose(rng).copied().ok_or(ChessErrors::NoLegalMoves)
}
