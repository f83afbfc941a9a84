//! Depth-bounded minimax with alpha-beta pruning. Scores are always from the
//! AI's point of view: the AI maximises, the human minimises.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{parse_history, Board, Player};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::eval;
use crate::rules::{has_line_of_four, is_terminal, legal_columns};

/// Magnitude of a decided game; dwarfs any heuristic sum.
pub const WIN_SCORE: i32 = 10_000_000;
/// Open window bound. Kept symmetric so negation never overflows.
pub const INFINITY: i32 = i32::MAX;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub history: String,
    #[serde(default = "default_depth")]
    pub depth: u8,
}

fn default_depth() -> u8 {
    EngineConfig::default().depth
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub column: usize,
    pub score: i32,
}

/// Replays `history` and picks the AI's reply.
pub fn best_move(request: MoveRequest) -> Result<MoveResponse, GameError> {
    let config = EngineConfig::with_depth(request.depth)?;
    let moves = parse_history(&request.history)?;
    let board = Board::from_history(&moves)?;
    let (column, score) = choose_move(&board, config.depth)?;
    Ok(MoveResponse { column, score })
}

/// Top-level search for the AI over the full window.
pub fn choose_move(board: &Board, depth: u8) -> Result<(usize, i32), GameError> {
    EngineConfig::with_depth(depth)?;
    let result = decide(board, depth, -INFINITY, INFINITY, true)?;
    let column = result.column.ok_or(GameError::GameOver)?;
    debug!(column, score = result.score, depth, "engine chose column");
    Ok((column, result.score))
}

pub fn decide(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> Result<SearchResult, GameError> {
    if is_terminal(board) {
        return Ok(SearchResult::leaf(terminal_score(board)));
    }
    if depth == 0 {
        return Ok(SearchResult::leaf(eval::score(board, Player::Ai)));
    }

    let columns = legal_columns(board);
    let mut best_column = *columns.first().ok_or(GameError::SearchInvariant)?;
    let (mover, mut best_value) = if maximizing {
        (Player::Ai, -INFINITY)
    } else {
        (Player::Human, INFINITY)
    };

    for col in columns {
        let row = board.next_open_row(col)?;
        let mut child = board.clone();
        child.place(row, col, mover);
        let value = decide(&child, depth - 1, alpha, beta, !maximizing)?.score;

        if maximizing {
            if value > best_value {
                best_value = value;
                best_column = col;
            }
            alpha = alpha.max(best_value);
        } else {
            if value < best_value {
                best_value = value;
                best_column = col;
            }
            beta = beta.min(best_value);
        }
        if alpha >= beta {
            break;
        }
    }

    Ok(SearchResult {
        column: Some(best_column),
        score: best_value,
    })
}

fn terminal_score(board: &Board) -> i32 {
    if has_line_of_four(board, Player::Ai) {
        WIN_SCORE
    } else if has_line_of_four(board, Player::Human) {
        -WIN_SCORE
    } else {
        0
    }
}
