//! Game configuration for the headless runner
//!
//! Defaults come from the constants in [`crate::types`]; the binary overrides them from
//! the command line and validates the result before any board is built.

use anyhow::{bail, Result};

use crate::types::{BOARD_SIZE, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, PALETTE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Root side length in pixels
    pub size: u32,
    pub max_depth: u8,
    /// Number of random players
    pub random_players: usize,
    /// One entry per smart player
    pub smart_difficulties: Vec<usize>,
    /// Rounds to play; every player moves once per round
    pub turns: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            random_players: 2,
            smart_difficulties: Vec::new(),
            turns: 5,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn player_count(&self) -> usize {
        self.random_players + self.smart_difficulties.len()
    }

    /// Reject configurations no game can be started with
    pub fn validate(&self) -> Result<()> {
        if self.player_count() == 0 {
            bail!("at least one player is required");
        }
        if self.player_count() > PALETTE.len() {
            bail!(
                "{} players requested but only {} goal colours exist",
                self.player_count(),
                PALETTE.len()
            );
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            bail!(
                "max depth {} exceeds the supported limit of {}",
                self.max_depth,
                MAX_SUPPORTED_DEPTH
            );
        }
        if self.size == 0 || self.size % (1u32 << self.max_depth) != 0 {
            bail!(
                "board size {} is not divisible by 2^{}",
                self.size,
                self.max_depth
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_count(), 2);
    }

    #[test]
    fn rejects_too_many_players() {
        let config = GameConfig {
            random_players: 3,
            smart_difficulties: vec![1, 2],
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("5 players"));
    }

    #[test]
    fn rejects_empty_game_and_uneven_size() {
        let config = GameConfig {
            random_players: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            size: 750,
            max_depth: 2,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
