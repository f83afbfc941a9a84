use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Player, COLS, ROWS};

/// Four (row, col) coordinates forming one straight run.
pub type Window = [(usize, usize); 4];

/// Every 4-cell run on the board in all four orientations.
pub static WINDOWS: Lazy<Vec<Window>> = Lazy::new(generate_windows);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Ongoing,
    PlayerWins,
    AiWins,
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::Ongoing
    }
}

/// Open columns in ascending order. Empty once the board is full.
pub fn legal_columns(board: &Board) -> Vec<usize> {
    (0..COLS)
        .filter(|&col| board.get(0, col).is_empty())
        .collect()
}

pub fn has_line_of_four(board: &Board, player: Player) -> bool {
    let piece = Cell::Piece(player);
    WINDOWS
        .iter()
        .any(|window| window.iter().all(|&(row, col)| board.get(row, col) == piece))
}

pub fn is_terminal(board: &Board) -> bool {
    has_line_of_four(board, Player::Ai)
        || has_line_of_four(board, Player::Human)
        || legal_columns(board).is_empty()
}

pub fn outcome(board: &Board) -> GameOutcome {
    if has_line_of_four(board, Player::Ai) {
        GameOutcome::AiWins
    } else if has_line_of_four(board, Player::Human) {
        GameOutcome::PlayerWins
    } else if legal_columns(board).is_empty() {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

fn generate_windows() -> Vec<Window> {
    let mut windows = Vec::new();
    // Horizontal
    for row in 0..ROWS {
        for col in 0..=COLS - 4 {
            windows.push(std::array::from_fn(|i| (row, col + i)));
        }
    }
    // Vertical
    for col in 0..COLS {
        for row in 0..=ROWS - 4 {
            windows.push(std::array::from_fn(|i| (row + i, col)));
        }
    }
    // Diagonal /
    for row in 3..ROWS {
        for col in 0..=COLS - 4 {
            windows.push(std::array::from_fn(|i| (row - i, col + i)));
        }
    }
    // Diagonal \
    for row in 3..ROWS {
        for col in 3..COLS {
            windows.push(std::array::from_fn(|i| (row - i, col - i)));
        }
    }
    windows
}
