//! Crate root module declarations for the PGN replay toolchain.
//!
//! This file exposes all top-level subsystems (board bookkeeping, notation
//! parsing, move resolution, the game driver, renderers, and splitting) so
//! binaries, tests, and external tooling can import stable module paths.

pub mod board {
    pub mod board_state;
    pub mod piece_types;
    pub mod roster;
}

pub mod notation {
    pub mod algebraic;
    pub mod move_classifier;
    pub mod movetext;
}

pub mod resolution {
    pub mod applicator;
    pub mod legality;
    pub mod resolver;
}

pub mod replay {
    pub mod context;
    pub mod driver;
    pub mod snapshot;
}

pub mod render {
    pub mod latex_book;
    pub mod text_board;
}

pub mod split {
    pub mod game_splitter;
}

pub mod replay_errors;
