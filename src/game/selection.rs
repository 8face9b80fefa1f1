//! Two-phase selection protocol for input layers.
//!
//! A first click on a piece selects it and computes its candidate
//! destinations; a second click on one of those candidates applies the
//! move; any other click cancels the selection. Pixel coordinates from a
//! windowed shell translate to squares by integer division by the tile
//! size.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::chess_errors::ChessErrors;
use crate::move_generation::move_generator::get_valid_moves;

/// What a click did to the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected; its candidate destinations are attached.
    Selected {
        from: BoardLocation,
        candidates: Vec<BoardLocation>,
    },
    /// A previously selected piece was moved.
    Moved {
        from: BoardLocation,
        to: BoardLocation,
    },
    /// An active selection was dropped without moving.
    Cancelled,
    /// A click on a vacant square with nothing selected.
    Ignored,
}

#[derive(Debug, Clone)]
struct Selection {
    from: BoardLocation,
    candidates: Vec<BoardLocation>,
}

/// Click-to-select, click-to-confirm state machine.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<Selection>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// The currently selected square, if any.
    pub fn selected(&self) -> Option<BoardLocation> {
        self.selected.as_ref().map(|s| s.from)
    }

    /// Drops any active selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Feeds one click into the protocol.
    pub fn click(
        &mut self,
        board: &mut ChessBoard,
        loc: BoardLocation,
    ) -> Result<ClickOutcome, ChessErrors> {
        if let Some(selection) = self.selected.take() {
            if selection.candidates.contains(&loc) && board.move_piece(selection.from, loc) {
                return Ok(ClickOutcome::Moved {
                    from: selection.from,
                    to: loc,
                });
            }
            return Ok(ClickOutcome::Cancelled);
        }

        let piece = board.get_piece(loc);
        if !piece.is_valid() {
            return Ok(ClickOutcome::Ignored);
        }

        let candidates = get_valid_moves(board, &piece, loc)?;
        self.selected = Some(Selection {
            from: loc,
            candidates: candidates.clone(),
        });
        Ok(ClickOutcome::Selected {
            from: loc,
            candidates,
        })
    }
}

/// Translates window pixel coordinates to a board square.
///
/// Mirrors the windowed shell's contract: each tile is `tile_size` pixels
/// on a side and the board fills the top-left `8 * tile_size` square of
/// the window.
pub fn tile_location(px: u32, py: u32, tile_size: u32) -> Option<BoardLocation> {
    if tile_size == 0 {
        return None;
    }
    let x = px / tile_size;
    let y = py / tile_size;
    if x > 7 || y > 7 {
        return None;
    }
    BoardLocation::try_new(x as u8, y as u8)
}
