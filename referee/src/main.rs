//! Headless referee: plays the engine against a seeded random opponent and
//! logs every move.
use anyhow::Context;
use clap::Parser;
use connect4::{legal_columns, EngineConfig, Game, GameOutcome, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

/// Play the Connect 4 engine against a random opponent.
#[derive(Parser, Debug)]
#[command(name = "referee", about = "Play the engine against a random opponent")]
struct RefereeArgs {
    /// Seed for the opponent and the opening coin flip
    #[arg(long, env = "REFEREE_SEED", default_value_t = 0)]
    seed: u64,

    /// Number of games to play
    #[arg(long, env = "REFEREE_GAMES", default_value_t = 1)]
    games: u32,

    /// Engine search depth in plies (1-15)
    #[arg(
        long,
        env = "REFEREE_DEPTH",
        default_value_t = connect4::config::DEFAULT_DEPTH,
        value_parser = parse_depth
    )]
    depth: u8,
}

impl RefereeArgs {
    fn engine(&self) -> EngineConfig {
        EngineConfig { depth: self.depth }
    }
}

fn parse_depth(raw: &str) -> Result<u8, String> {
    let depth: u8 = raw.parse().map_err(|err| format!("{err}"))?;
    EngineConfig::with_depth(depth)
        .map(|config| config.depth)
        .map_err(|err| err.to_string())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    ai_wins: u32,
    player_wins: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::AiWins => self.ai_wins += 1,
            GameOutcome::PlayerWins => self.player_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = RefereeArgs::parse();
    info!(?args, "starting referee");

    let engine = args.engine();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut tally = Tally::default();
    for round in 1..=args.games {
        let game = play_game(&mut rng, &engine)?;
        info!(round, outcome = ?game.outcome(), "game finished\n{}", game.board());
        tally.record(game.outcome());
    }
    info!(?tally, "all games finished");
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Runs one game to completion; the random side stands in for the human.
fn play_game(rng: &mut StdRng, engine: &EngineConfig) -> anyhow::Result<Game> {
    let mut game = Game::with_random_first(rng);
    info!(first = ?game.to_move(), "new game");
    while !game.outcome().is_over() {
        let mv = match game.to_move() {
            Player::Ai => game.play_ai(engine)?,
            Player::Human => {
                let column = *legal_columns(game.board())
                    .choose(rng)
                    .context("ongoing game has no open column")?;
                game.play_human(column)?
            }
        };
        debug!(player = ?mv.player, column = mv.column, row = mv.row, "move");
    }
    Ok(game)
}
