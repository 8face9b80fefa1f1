//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by the board
//! model, move generation, and the coordinate parsing utilities. The enum
//! `ChessErrors` is the single error type across the crate to simplify
//! propagation and matching. Variants carry contextual payloads where
//! useful so callers can log or display precise diagnostics.

use std::error::Error;
use std::fmt;

use crate::board::board_location::BoardLocation;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Invalid file or rank indices were provided (outside 0..=7).
    ///
    /// Payload: (x, y) zero-based, origin top-left.
    InvalidFileOrRank((u8, u8)),

    /// Move generation was requested for a square holding the vacant
    /// sentinel piece.
    ///
    /// Payload: the vacant square's location.
    VacantSquareSelected(BoardLocation),

    /// A single character used during algebraic parsing was invalid
    /// (a file outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic square string failed to parse.
    ///
    /// Payload: the original string that could not be interpreted.
    InvalidAlgebraicString(String),

    /// No legal moves are available for the requested side.
    NoLegalMoves,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidFileOrRank((x, y)) => {
                write!(f, "file or rank out of range: ({x}, {y})")
            }
            ChessErrors::VacantSquareSelected(loc) => {
                write!(f, "no piece at ({}, {})", loc.x(), loc.y())
            }
            ChessErrors::InvalidAlgebraicChar(c) => {
                write!(f, "invalid algebraic character: {c}")
            }
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid algebraic square: {s}")
            }
            ChessErrors::NoLegalMoves => write!(f, "no legal moves available"),
        }
    }
}

impl Error for ChessErrors {}
