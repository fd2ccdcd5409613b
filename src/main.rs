//! Headless Blocky runner (default binary).
//!
//! Builds a random board, hands out goals to automated players and lets them play a
//! fixed number of rounds. Rendering and human input are left to other front ends.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};

use blocky::config::GameConfig;
use blocky::core::{generate_goals, rng, Block, BoardSnapshot, Goal};
use blocky::engine::{apply_move, Player, RandomPlayer, SmartPlayer};
use blocky::types::{BOARD_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_SMART_DIFFICULTY};

/// Play Blocky between automated players.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Cli {
    /// Board side length in pixels
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: u32,

    /// Deepest level a block may reach
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u8,

    /// Number of random players
    #[arg(short, long, default_value_t = 2)]
    random: usize,

    /// Number of smart players
    #[arg(short, long, default_value_t = 0)]
    smart: usize,

    /// Candidate moves each smart player evaluates per turn
    #[arg(long, default_value_t = DEFAULT_SMART_DIFFICULTY)]
    difficulty: usize,

    /// Number of rounds to play
    #[arg(short, long, default_value_t = 5)]
    turns: usize,

    /// Seed for the board and the players; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            max_depth: self.max_depth,
            random_players: self.random,
            smart_difficulties: vec![self.difficulty; self.smart],
            turns: self.turns,
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = cli.config();
    config.validate().context("invalid game configuration")?;

    let board = run(&config)?;

    if cli.json {
        let snapshot = BoardSnapshot::capture(&board);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

/// Build players in order: random players first, then smart players
fn create_players(config: &GameConfig, goals: Vec<Goal>) -> Vec<Box<dyn Player>> {
    goals
        .into_iter()
        .enumerate()
        .map(|(id, goal)| {
            let seed = config.seed.wrapping_add(id as u64 + 1);
            if id < config.random_players {
                Box::new(RandomPlayer::new(id, goal, seed)) as Box<dyn Player>
            } else {
                let difficulty = config.smart_difficulties[id - config.random_players];
                Box::new(SmartPlayer::new(id, goal, difficulty, seed))
            }
        })
        .collect()
}

fn run(config: &GameConfig) -> Result<Block> {
    info!("seed {}", config.seed);
    let mut game_rng = rng::seeded(config.seed);

    let mut board = Block::random(config.size, config.max_depth, &mut game_rng)
        .context("cannot create board")?;
    let goals =
        generate_goals(config.player_count(), &mut game_rng).context("cannot assign goals")?;
    let mut players = create_players(config, goals);

    for turn in 1..=config.turns {
        for player in players.iter_mut() {
            let mv = player.generate_move(&board);
            let colour = player.goal().colour();
            match apply_move(&mut board, &mv, colour, &mut game_rng) {
                Ok(()) => info!("turn {}: player {} plays {}", turn, player.id(), mv),
                Err(e) => warn!("turn {}: player {} move failed: {}", turn, player.id(), e),
            }
        }
    }

    for player in &players {
        let goal = player.goal();
        println!(
            "Player {}: {} - score {}",
            player.id(),
            goal.description(),
            goal.score(&board)
        );
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_players_use_default_difficulty() {
        let cli = Cli::try_parse_from(["blocky", "-r", "1", "-s", "2", "--seed", "3"]).unwrap();
        let config = cli.config();
        assert_eq!(config.random_players, 1);
        assert_eq!(
            config.smart_difficulties,
            vec![DEFAULT_SMART_DIFFICULTY, DEFAULT_SMART_DIFFICULTY]
        );
        assert_eq!(config.seed, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn difficulty_applies_to_every_smart_player() {
        let cli = Cli::try_parse_from(["blocky", "-s", "3", "--difficulty", "9"]).unwrap();
        let config = cli.config();
        assert_eq!(config.smart_difficulties, vec![9; 3]);
        assert_eq!(config.player_count(), 5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn players_are_created_in_order() {
        let config = GameConfig {
            random_players: 1,
            smart_difficulties: vec![DEFAULT_SMART_DIFFICULTY],
            ..GameConfig::default()
        };
        let goals = generate_goals(2, &mut rng::seeded(1)).unwrap();
        let players = create_players(&config, goals.clone());
        let ids: Vec<_> = players.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(players[1].goal(), goals[1]);
    }
}
