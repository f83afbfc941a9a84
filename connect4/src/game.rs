use rand::Rng;
use tracing::debug;

use crate::board::{Board, Player};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::rules::{self, GameOutcome};
use crate::search;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub outcome: GameOutcome,
}

/// A live game: the one board real moves are applied to, plus whose turn it is.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: GameOutcome,
}

impl Game {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: GameOutcome::Ongoing,
        }
    }

    /// Coin flip for who opens.
    pub fn with_random_first<R: Rng>(rng: &mut R) -> Self {
        let first = if rng.gen_bool(0.5) {
            Player::Human
        } else {
            Player::Ai
        };
        Self::new(first)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn play_human(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        self.play(Player::Human, column)
    }

    /// Searches from the live position and applies the engine's column.
    pub fn play_ai(&mut self, config: &EngineConfig) -> Result<MoveOutcome, GameError> {
        config.validate()?;
        self.check_turn(Player::Ai)?;
        let (column, _) = search::choose_move(&self.board, config.depth)?;
        self.play(Player::Ai, column)
    }

    fn check_turn(&self, player: Player) -> Result<(), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        if self.to_move != player {
            return Err(GameError::NotYourTurn {
                expected: self.to_move,
            });
        }
        Ok(())
    }

    fn play(&mut self, player: Player, column: usize) -> Result<MoveOutcome, GameError> {
        self.check_turn(player)?;
        let row = self.board.drop_piece(column, player)?;
        self.outcome = rules::outcome(&self.board);
        self.to_move = player.opponent();
        debug!(?player, column, row, outcome = ?self.outcome, "move applied");
        Ok(MoveOutcome {
            player,
            column,
            row,
            outcome: self.outcome,
        })
    }
}
