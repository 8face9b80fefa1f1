//! Terminal front-end for the rules engine.
//!
//! Stands in for the windowed shell: renders the board after every state
//! change and feeds typed squares into the same two-click selection
//! protocol a mouse-driven layer would use.

use std::io::{self, BufRead, Write};

use parlor_chess::board::board_location::BoardLocation;
use parlor_chess::board::chess_board::ChessBoard;
use parlor_chess::board::piece_team::PieceTeam;
use parlor_chess::game::selection::{ClickOutcome, SelectionState};
use parlor_chess::utils::algebraic::{algebraic_to_location, location_to_algebraic};
use parlor_chess::utils::random_mover::pick_random_move;
use parlor_chess::utils::render_board::render_board;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut board = ChessBoard::new();
    let mut selection = SelectionState::new();

    writeln!(stdout, "{}", render_board(&board))?;
    writeln!(
        stdout,
        "type a square (e2) to select or confirm, 'help' for commands"
    )?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = handle_command(&mut board, &mut selection, &line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_command(
    board: &mut ChessBoard,
    selection: &mut SelectionState,
    line: &str,
    out: &mut impl Write,
) -> io::Result<bool> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }

    let mut parts = trimmed.split_whitespace();
    let cmd = parts.next().unwrap_or_default();

    match cmd {
        "quit" | "exit" => return Ok(true),
        "help" => {
            writeln!(out, "commands:")?;
            writeln!(out, "  <square>            click that square (e2, d5, ...)")?;
            writeln!(out, "  board               reprint the board")?;
            writeln!(out, "  random light|dark   play a random move for that side")?;
            writeln!(out, "  quit                leave the game")?;
        }
        "board" => {
            writeln!(out, "{}", render_board(board))?;
        }
        "random" => {
            handle_random(board, selection, parts.next(), out)?;
        }
        square => match algebraic_to_location(square) {
            Ok(loc) => handle_click(board, selection, loc, out)?,
            Err(err) => writeln!(out, "{err}")?,
        },
    }

    Ok(false)
}

fn handle_click(
    board: &mut ChessBoard,
    selection: &mut SelectionState,
    loc: BoardLocation,
    out: &mut impl Write,
) -> io::Result<()> {
    match selection.click(board, loc) {
        Ok(ClickOutcome::Selected { from, candidates }) => {
            let squares: Vec<String> = candidates.iter().map(|c| location_to_algebraic(*c)).collect();
            writeln!(
                out,
                "{} selected: {}",
                location_to_algebraic(from),
                if squares.is_empty() {
                    "(no moves)".to_owned()
                } else {
                    squares.join(" ")
                }
            )?;
        }
        Ok(ClickOutcome::Moved { from, to }) => {
            writeln!(
                out,
                "moved {} to {}",
                location_to_algebraic(from),
                location_to_algebraic(to)
            )?;
            writeln!(out, "{}", render_board(board))?;
        }
        Ok(ClickOutcome::Cancelled) => {
            writeln!(out, "selection cancelled")?;
        }
        Ok(ClickOutcome::Ignored) => {
            writeln!(out, "no piece on {}", location_to_algebraic(loc))?;
        }
        Err(err) => {
            writeln!(out, "{err}")?;
        }
    }
    Ok(())
}

fn handle_random(
    board: &mut ChessBoard,
    selection: &mut SelectionState,
    side: Option<&str>,
    out: &mut impl Write,
) -> io::Result<()> {
    let team = match side {
        Some("light") => PieceTeam::Light,
        Some("dark") => PieceTeam::Dark,
        _ => {
            writeln!(out, "usage: random light|dark")?;
            return Ok(());
        }
    };

    let mut rng = rand::rng();
    match pick_random_move(board, team, &mut rng) {
        Ok((from, to)) => {
            selection.clear();
            board.move_piece(from, to);
            writeln!(
                out,
                "moved {} to {}",
                location_to_algebraic(from),
                location_to_algebraic(to)
            )?;
            writeln!(out, "{}", render_board(board))?;
        }
        Err(err) => {
            writeln!(out, "{err}")?;
        }
    }
    Ok(())
}
