//! Conversions between long algebraic squares and board locations.
//!
//! Rank 1 sits at the bottom of the rendered board (y = 7) and rank 8 at
//! the top (y = 0), matching the top-left-origin coordinate system.

use crate::board::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;

/// Convert long algebraic notation (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    BoardLocation::new(file - b'a', b'8' - rank)
}

/// Convert a board location to long algebraic notation (for example: "e4").
pub fn location_to_algebraic(loc: BoardLocation) -> String {
    let file_char = char::from(b'a' + loc.x());
    let rank_char = char::from(b'8' - loc.y());
    format!("{file_char}{rank_char}")
}
