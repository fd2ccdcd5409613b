//! Move engine - automated players on top of the core board
//!
//! - [`moves`]: [`Move`] values and [`apply_move`], which resolves a move's target block
//!   and performs the action
//! - [`player`]: the [`Player`] trait with [`RandomPlayer`] and [`SmartPlayer`]
//!
//! Players only propose moves. Whoever owns the board applies them, so the board has a
//! single writer.
//!
//! # Example
//!
//! ```
//! use blocky_core::{rng, Block, Goal};
//! use blocky_core::types::REAL_RED;
//! use blocky_engine::{apply_move, Player, SmartPlayer};
//!
//! let mut game_rng = rng::seeded(1);
//! let mut board = Block::random(768, 2, &mut game_rng).unwrap();
//! let mut player = SmartPlayer::new(0, Goal::Blob(REAL_RED), 5, 42);
//!
//! let before = player.goal().score(&board);
//! let mv = player.generate_move(&board);
//! if !mv.is_pass() {
//!     apply_move(&mut board, &mv, REAL_RED, &mut game_rng).unwrap();
//! }
//! # let _ = before;
//! ```

pub mod moves;
pub mod player;

pub use blocky_core as core;
pub use blocky_types as types;

pub use moves::{apply_move, Move, MoveError};
pub use player::{random_valid_move, try_random_move, Player, RandomPlayer, SmartPlayer};
