//! Core game logic - the board model and its scoring
//!
//! This crate contains the quadtree board, the flattened grid view and the goals that
//! score it. It has **no dependencies** on rendering, input handling or process setup,
//! making it:
//!
//! - **Deterministic**: every random choice takes an injected generator
//! - **Testable**: moves report legality as `bool` and never panic on illegal input
//! - **Portable**: renderers consume a [`BoardSnapshot`], players call block methods
//!
//! # Module Structure
//!
//! - [`block`]: quadtree nodes with smash, swap, rotate, combine and paint
//! - [`grid`]: flattening a block into a column-major unit-cell grid
//! - [`goal`]: perimeter and blob scoring, goal generation
//! - [`rng`]: palette draws and seeded generators
//! - [`snapshot`]: leaf squares for renderers
//! - [`error`]: construction and generation errors
//!
//! # Example
//!
//! ```
//! use blocky_core::{generate_goals, rng, Block, Goal};
//! use blocky_core::types::{SwapDirection, PALETTE};
//!
//! let mut rng = rng::seeded(12345);
//! let mut board = Block::random(768, 3, &mut rng).unwrap();
//!
//! // Try a move on a copy before committing to it
//! let mut copy = board.create_copy();
//! if copy.swap(SwapDirection::Vertical) {
//!     board = copy;
//! }
//!
//! let goals = generate_goals(2, &mut rng).unwrap();
//! assert_ne!(goals[0].colour(), goals[1].colour());
//! assert!(Goal::Blob(PALETTE[0]).score(&board) <= 64);
//! ```

pub mod block;
pub mod error;
pub mod goal;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use blocky_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use error::{BlockError, GoalError};
pub use goal::{
    blob_score, generate_goals, perimeter_score, undiscovered_blob_size, Goal, GoalKind, Visit,
    VisitMap,
};
pub use grid::{flatten, Grid};
pub use rng::{random_colour, seeded, ColourBag};
pub use snapshot::{BoardSnapshot, Square};
