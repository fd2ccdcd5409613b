//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board model, goals, automated players, renderers).
//!
//! # Board Geometry
//!
//! The board is a square quadtree. A block at `level` covers
//! `size / 2^level` pixels per side and flattens to `2^(max_depth - level)`
//! unit cells per side.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 768 | Default root side length in pixels |
//! | `DEFAULT_MAX_DEPTH` | 4 | Default depth limit of a fresh board |
//! | `MAX_SUPPORTED_DEPTH` | 10 | Hard limit accepted by the board constructor |
//! | `SUBDIVIDE_DECAY` | 0.25 | Random board: split chance is `exp(-decay * level)` |
//!
//! # Quadrant Order
//!
//! Children are always stored in this order:
//!
//! | Index | Quadrant |
//! |-------|----------|
//! | 0 | top-right |
//! | 1 | top-left |
//! | 2 | bottom-left |
//! | 3 | bottom-right |
//!
//! # Examples
//!
//! ```
//! use blocky_types::{Action, Colour, Quadrant, PALETTE, colour_name};
//!
//! assert_eq!(PALETTE.len(), 4);
//! assert_eq!(colour_name(PALETTE[1]), Some("Real Red"));
//! assert_eq!(Colour::new(1, 128, 181).hex(), "#0180b5");
//!
//! assert_eq!(Quadrant::TopRight.index(), 0);
//! assert_eq!(Quadrant::BottomRight.offset(), (1, 1));
//!
//! assert_eq!(Action::RotateClockwise.to_string(), "rotateCw");
//! assert_eq!(Action::Smash.as_str(), "smash");
//! ```

use std::fmt;

/// Default root side length in pixels (divisible by `2^8`)
pub const BOARD_SIZE: u32 = 768;

/// Default depth limit of a fresh board
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// Largest `max_depth` a board accepts
///
/// The flattened side is `2^max_depth`, so scoring allocates at most `2^20` cells.
pub const MAX_SUPPORTED_DEPTH: u8 = 10;

/// Decay rate of the subdivision probability when generating a random board
pub const SUBDIVIDE_DECAY: f64 = 0.25;

/// Number of candidate moves a smart player evaluates by default
pub const DEFAULT_SMART_DIFFICULTY: usize = 5;

/// Upper bound on random attempts when searching for one valid move
pub const MAX_MOVE_ATTEMPTS: usize = 1000;

/// An RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` representation
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match colour_name(*self) {
            Some(name) => f.write_str(name),
            None => f.write_str(&self.hex()),
        }
    }
}

pub const PACIFIC_POINT: Colour = Colour::new(1, 128, 181);
pub const REAL_RED: Colour = Colour::new(199, 44, 58);
pub const OLD_OLIVE: Colour = Colour::new(138, 151, 71);
pub const DAFFODIL_DELIGHT: Colour = Colour::new(255, 211, 92);

/// The fixed palette every board and goal draws from
///
/// Palette order doubles as the tie-break order when combining blocks.
pub const PALETTE: [Colour; 4] = [PACIFIC_POINT, REAL_RED, OLD_OLIVE, DAFFODIL_DELIGHT];

const PALETTE_NAMES: [&str; 4] = ["Pacific Point", "Real Red", "Old Olive", "Daffodil Delight"];

/// Position of a colour in [`PALETTE`]
pub fn palette_index(colour: Colour) -> Option<usize> {
    PALETTE.iter().position(|&c| c == colour)
}

/// Human readable name of a palette colour
pub fn colour_name(colour: Colour) -> Option<&'static str> {
    palette_index(colour).map(|i| PALETTE_NAMES[i])
}

/// One of the four children of a subdivided block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in storage order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(self) -> usize {
        match self {
            Quadrant::TopRight => 0,
            Quadrant::TopLeft => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    /// Offset of this quadrant's top-left corner, in units of the child size
    pub fn offset(self) -> (u32, u32) {
        match self {
            Quadrant::TopRight => (1, 0),
            Quadrant::TopLeft => (0, 0),
            Quadrant::BottomLeft => (0, 1),
            Quadrant::BottomRight => (1, 1),
        }
    }
}

/// Axis along which the children of a block are exchanged
///
/// - **Horizontal**: left column swaps with right column
/// - **Vertical**: top row swaps with bottom row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    Horizontal,
    Vertical,
}

/// Quarter-turn direction for rotating the children of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    /// The opposite quarter-turn
    pub fn reverse(self) -> Self {
        match self {
            RotateDirection::Clockwise => RotateDirection::CounterClockwise,
            RotateDirection::CounterClockwise => RotateDirection::Clockwise,
        }
    }
}

/// Moves a player can make on a selected block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rotate children 90° clockwise
    RotateClockwise,
    /// Rotate children 90° counter-clockwise
    RotateCounterClockwise,
    /// Exchange left and right halves
    SwapHorizontal,
    /// Exchange top and bottom halves
    SwapVertical,
    /// Subdivide a leaf into four randomly coloured leaves
    Smash,
    /// Recolour a leaf with the player's goal colour
    Paint,
    /// Collapse four leaves into one of their majority colour
    Combine,
    /// Do nothing this turn
    Pass,
}

impl Action {
    /// Every action that changes the board
    pub const MOVES: [Action; 7] = [
        Action::SwapVertical,
        Action::SwapHorizontal,
        Action::RotateClockwise,
        Action::RotateCounterClockwise,
        Action::Smash,
        Action::Paint,
        Action::Combine,
    ];

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::RotateClockwise => "rotateCw",
            Action::RotateCounterClockwise => "rotateCcw",
            Action::SwapHorizontal => "swapHorizontal",
            Action::SwapVertical => "swapVertical",
            Action::Smash => "smash",
            Action::Paint => "paint",
            Action::Combine => "combine",
            Action::Pass => "pass",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_supports_deep_boards() {
        assert_eq!(BOARD_SIZE % (1 << 8), 0);
        assert!(DEFAULT_MAX_DEPTH <= MAX_SUPPORTED_DEPTH);
    }

    #[test]
    fn palette_is_distinct_and_named() {
        for (i, a) in PALETTE.iter().enumerate() {
            assert_eq!(palette_index(*a), Some(i));
            assert!(colour_name(*a).is_some());
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(colour_name(Colour::new(0, 0, 0)), None);
    }

    #[test]
    fn colour_display_falls_back_to_hex() {
        assert_eq!(PACIFIC_POINT.to_string(), "Pacific Point");
        assert_eq!(Colour::new(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn quadrant_index_matches_storage_order() {
        for (i, q) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
        }
    }

    #[test]
    fn quadrant_offsets_tile_the_parent() {
        let mut offsets: Vec<_> = Quadrant::ALL.iter().map(|q| q.offset()).collect();
        offsets.sort();
        assert_eq!(offsets, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn rotate_direction_reverse() {
        assert_eq!(
            RotateDirection::Clockwise.reverse(),
            RotateDirection::CounterClockwise
        );
    }

    #[test]
    fn action_names_are_distinct() {
        let all: Vec<Action> = Action::MOVES
            .iter()
            .copied()
            .chain(std::iter::once(Action::Pass))
            .collect();
        for (i, action) in all.iter().enumerate() {
            assert_eq!(action.to_string(), action.as_str());
            assert!(all[i + 1..].iter().all(|a| a.as_str() != action.as_str()));
        }
        assert!(!Action::MOVES.contains(&Action::Pass));
    }
}
