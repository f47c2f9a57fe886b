//! Crate root module declarations for the Plum Rules chess rule engine.
//!
//! This file exposes the subsystems (board model and game state, move
//! generation and legality, the game state machine, the xboard front-end and
//! utility helpers) so the binary, benches and host applications can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod clock;
    pub mod game;
    pub mod game_options;
    pub mod move_description;
    pub mod piece;
    pub mod position;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod game_flow {
    pub mod commit;
    pub mod snapshot;
    pub mod update_state;
}

pub mod protocol {
    pub mod move_source;
    pub mod xboard;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_board;
}
