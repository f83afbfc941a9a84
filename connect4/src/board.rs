//! Cell storage for the 6x7 grid. Row 0 is the top, row 5 the bottom;
//! pieces stack bottom-up inside each column.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    fn symbol(self) -> char {
        match self {
            Player::Human => 'H',
            Player::Ai => 'A',
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Piece(player)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays a parsed history, validating every drop.
    pub fn from_history(moves: &[TypedMove]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for mv in moves {
            board.drop_piece(mv.column, mv.player)?;
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True while the top cell of `col` is still empty.
    pub fn is_open(&self, col: usize) -> Result<bool, GameError> {
        check_column(col)?;
        Ok(self.cells[0][col].is_empty())
    }

    /// Lowest empty row of `col`, scanning from the bottom.
    pub fn next_open_row(&self, col: usize) -> Result<usize, GameError> {
        check_column(col)?;
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(GameError::ColumnFull { column: col })
    }

    /// Unchecked write. Callers compute `row` through `next_open_row`.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Cell::Piece(player);
    }

    /// Validated drop used for real moves; returns the landing row.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        if !self.is_open(col)? {
            return Err(GameError::ColumnFull { column: col });
        }
        let row = self.next_open_row(col)?;
        self.place(row, col, player);
        Ok(row)
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Piece(player))
            .count()
    }
}

fn check_column(col: usize) -> Result<(), GameError> {
    if col >= COLS {
        return Err(GameError::InvalidColumn { column: col });
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Piece(player) => player.symbol(),
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedMove {
    pub player: Player,
    pub column: usize,
}

/// Parses a compact history such as `H3A3H2`: a side letter (`H` or `A`,
/// either case) followed by a single column digit.
pub fn parse_history(history: &str) -> Result<Vec<TypedMove>, GameError> {
    if history.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut moves = Vec::new();
    let chars: Vec<char> = history.trim().chars().collect();
    let mut idx = 0;
    while idx < chars.len() {
        let side = chars[idx];
        let player = match side {
            'H' | 'h' => Player::Human,
            'A' | 'a' => Player::Ai,
            _ => {
                return Err(GameError::ParseMove {
                    position: idx,
                    reason: format!("expected H or A, found {side}"),
                })
            }
        };
        idx += 1;
        let Some(&column_char) = chars.get(idx) else {
            return Err(GameError::ParseMove {
                position: idx,
                reason: "missing column number".to_string(),
            });
        };
        let Some(column) = column_char.to_digit(10).map(|d| d as usize) else {
            return Err(GameError::ParseMove {
                position: idx,
                reason: format!("expected column digit, found {column_char}"),
            });
        };
        if column >= COLS {
            return Err(GameError::ParseMove {
                position: idx,
                reason: format!("column must be 0-{}", COLS - 1),
            });
        }
        moves.push(TypedMove { player, column });
        idx += 1;
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn column_fills_bottom_up() {
        let mut board = Board::new();
        let mut rows = Vec::new();
        for _ in 0..ROWS {
            assert!(board.is_open(2).unwrap());
            let row = board.next_open_row(2).unwrap();
            board.place(row, 2, Player::Human);
            rows.push(row);
        }
        assert_eq!(rows, vec![5, 4, 3, 2, 1, 0]);
        assert!(!board.is_open(2).unwrap());
        assert_eq!(
            board.next_open_row(2),
            Err(GameError::ColumnFull { column: 2 })
        );
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let board = Board::new();
        assert_eq!(
            board.is_open(COLS),
            Err(GameError::InvalidColumn { column: COLS })
        );
        assert_eq!(
            board.next_open_row(11),
            Err(GameError::InvalidColumn { column: 11 })
        );
    }

    #[test]
    fn drop_piece_refuses_full_column() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Player::Ai).unwrap();
        }
        assert_eq!(
            board.drop_piece(0, Player::Human),
            Err(GameError::ColumnFull { column: 0 })
        );
        assert_eq!(board.count(Player::Ai), ROWS);
        assert_eq!(board.count(Player::Human), 0);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Board::new();
        original.drop_piece(3, Player::Human).unwrap();
        let snapshot = original.clone();

        let mut copy = original.clone();
        copy.drop_piece(3, Player::Ai).unwrap();
        copy.drop_piece(4, Player::Ai).unwrap();

        assert_eq!(original, snapshot);
        assert_ne!(original, copy);
        assert_eq!(original.get(4, 3), Cell::Empty);
    }

    #[test]
    fn parse_and_replay_history() {
        let moves = parse_history("h2A2H1a3").unwrap();
        assert_eq!(moves.len(), 4);
        assert_eq!(
            moves[1],
            TypedMove {
                player: Player::Ai,
                column: 2
            }
        );
        let board = Board::from_history(&moves).unwrap();
        assert_eq!(board.get(5, 2), Cell::Piece(Player::Human));
        assert_eq!(board.get(4, 2), Cell::Piece(Player::Ai));
        assert_eq!(board.get(5, 3), Cell::Piece(Player::Ai));
    }

    #[test]
    fn parse_rejects_malformed_history() {
        assert!(matches!(
            parse_history("H7"),
            Err(GameError::ParseMove { position: 1, .. })
        ));
        assert!(matches!(
            parse_history("X3"),
            Err(GameError::ParseMove { position: 0, .. })
        ));
        assert!(matches!(
            parse_history("H3A"),
            Err(GameError::ParseMove { position: 3, .. })
        ));
    }

    #[test]
    fn replay_rejects_overfilled_column() {
        let moves = parse_history("H0A0H0A0H0A0H0").unwrap();
        assert_eq!(
            Board::from_history(&moves),
            Err(GameError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn display_draws_top_row_first() {
        let board = Board::from_history(&parse_history("H3A3").unwrap()).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], ".......");
        assert_eq!(lines[4], "...A...");
        assert_eq!(lines[5], "...H...");
    }
}
