//! Crate root module declarations for the Tap Chess rules engine.
//!
//! This file exposes the board model, per-piece reach rules, the turn
//! controller, the session wrapper, and the text/CLI helpers so binaries,
//! tests, and benchmarks can import stable module paths.

pub mod board_location;
pub mod chess_errors;
pub mod config;
pub mod session;
pub mod turn_controller;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod reach;
    pub mod rook_moves;
}

pub mod interface {
    pub mod tap_loop;
}

pub mod utils {
    pub mod random_taps;
    pub mod render_board;
    pub mod tap_parser;
}
