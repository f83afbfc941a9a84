use thiserror::Error;

use crate::board::Player;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move string at position {position}: {reason}")]
    ParseMove { position: usize, reason: String },
    #[error("column {column} is out of bounds")]
    InvalidColumn { column: usize },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    /// A non-terminal node produced no legal columns. Rules and the terminal
    /// check disagree; this is a bug, never a recoverable condition.
    #[error("search reached a non-terminal position with no legal columns")]
    SearchInvariant,
    #[error("depth {0} is out of range (1-15)")]
    DepthOutOfRange(u8),
    #[error("the game is already over")]
    GameOver,
    #[error("it is {expected:?}'s turn")]
    NotYourTurn { expected: Player },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_column() {
        assert_eq!(
            GameError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(
            GameError::InvalidColumn { column: 9 }.to_string(),
            "column 9 is out of bounds"
        );
    }

    #[test]
    fn turn_error_names_the_expected_side() {
        let err = GameError::NotYourTurn {
            expected: Player::Ai,
        };
        assert_eq!(err.to_string(), "it is Ai's turn");
    }
}
