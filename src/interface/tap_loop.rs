//! Line-oriented front-end and command loop.
//!
//! Reads one command per line, forwards taps to the session, and prints the
//! board after every change. This is the text stand-in for a tap-driven UI.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::chess_errors::ChessResult;
use crate::session::GameSession;
use crate::turn_controller::{IgnoreReason, SelectionOutcome};
use crate::utils::render_board::{render_board, render_turn, RenderOptions};
use crate::utils::tap_parser::parse_tap;

const HELP_TEXT: &str = "\
commands:
  <row> <col>   tap a square (0-7 each, row 0 is Black's home rank)
  board         print the board
  turn          print the side to move
  reset         start a new game
  help          show this text
  quit          leave";

pub fn run_stdio_loop(options: RenderOptions) -> ChessResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut tap_loop = TapLoop::new(options);

    tap_loop.print_board(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = tap_loop.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TapLoop {
    session: GameSession,
    options: RenderOptions,
}

impl TapLoop {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            session: GameSession::new(),
            options,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handles one input line. Returns `Ok(true)` when the loop should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        match trimmed {
            "board" => self.print_board(out)?,
            "turn" => writeln!(out, "{}", render_turn(self.session.current_turn()))?,
            "reset" => {
                self.session.reset();
                self.print_board(out)?;
            }
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            _ => match parse_tap(trimmed) {
                Ok((row, col)) => {
                    let outcome = self.session.select_square(row, col);
                    debug!("tap ({row}, {col}) -> {outcome:?}");
                    self.report(outcome, out)?;
                }
                Err(err) => {
                    warn!("rejected input '{trimmed}'");
                    writeln!(out, "error: {err}")?;
                }
            },
        }

        Ok(false)
    }

    fn report(&self, outcome: SelectionOutcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            SelectionOutcome::Selected(_) | SelectionOutcome::SelectionSwitched { .. } => {
                self.print_board(out)
            }
            SelectionOutcome::Moved { from, to, captured } => {
                match captured {
                    Some(kind) => writeln!(out, "moved {from:?} -> {to:?}, captured {kind:?}")?,
                    None => writeln!(out, "moved {from:?} -> {to:?}")?,
                }
                self.print_board(out)
            }
            SelectionOutcome::Ignored(IgnoreReason::NotMoversPiece) => writeln!(
                out,
                "nothing to do there; {}",
                render_turn(self.session.current_turn())
            ),
            SelectionOutcome::Ignored(IgnoreReason::Unreachable) => {
                writeln!(out, "selected piece cannot go there")
            }
        }
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render_board(&self.session.current_board(), &self.options))?;
        writeln!(out, "{}", render_turn(self.session.current_turn()))
    }
}
