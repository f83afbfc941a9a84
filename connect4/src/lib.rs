//! Connect 4 engine with minimax search and alpha-beta pruning.
//! The human and the AI share a 6x7 board; on its turn the AI searches a
//! fixed number of plies ahead and scores the leaves with a pattern-counting
//! heuristic. Positions can be built move by move through [`Game`] or
//! replayed from a compact history string (e.g. `H3A3H2`).
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

pub use board::{parse_history, Board, Cell, Player, TypedMove, COLS, ROWS};
pub use config::EngineConfig;
pub use error::GameError;
pub use game::{Game, MoveOutcome};
pub use rules::{has_line_of_four, is_terminal, legal_columns, outcome, GameOutcome};
pub use search::{
    best_move, choose_move, decide, MoveRequest, MoveResponse, SearchResult, INFINITY, WIN_SCORE,
};
