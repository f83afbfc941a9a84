//! Static pattern-counting heuristic. No lookahead.
use crate::board::{Board, Cell, Player, CENTER_COL, ROWS};
use crate::rules::WINDOWS;

const CENTER_WEIGHT: i32 = 6;
const FOUR: i32 = 100;
const OPEN_THREE: i32 = 5;
const OPEN_TWO: i32 = 2;
const OPPONENT_OPEN_THREE: i32 = -4;

/// Scores `board` from `player`'s point of view; higher is better for them.
pub fn score(board: &Board, player: Player) -> i32 {
    let own = Cell::Piece(player);
    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own)
        .count() as i32;

    let mut score = CENTER_WEIGHT * center;
    for &window in WINDOWS.iter() {
        let cells = window.map(|(row, col)| board.get(row, col));
        score += score_window(&cells, player);
    }
    score
}

pub fn score_window(cells: &[Cell; 4], player: Player) -> i32 {
    let count = |target: Cell| cells.iter().filter(|&&cell| cell == target).count();
    let own = count(Cell::Piece(player));
    let theirs = count(Cell::Piece(player.opponent()));
    let empty = count(Cell::Empty);

    let mut score = match (own, empty) {
        (4, _) => FOUR,
        (3, 1) => OPEN_THREE,
        (2, 2) => OPEN_TWO,
        _ => 0,
    };
    if theirs == 3 && empty == 1 {
        score += OPPONENT_OPEN_THREE;
    }
    score
}
