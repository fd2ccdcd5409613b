//! Error types for board construction and goal generation
//!
//! Illegal moves are not errors: block mutations report them as `false`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// The root side cannot be halved `max_depth` times without a remainder
    UnevenSize { size: u32, max_depth: u8 },
    /// `max_depth` is beyond what the board supports
    DepthTooLarge { max_depth: u8, limit: u8 },
    /// The root square reaches past the pixel coordinate range
    OutOfRange { position: (u32, u32), size: u32 },
}

impl BlockError {
    pub fn code(self) -> &'static str {
        match self {
            BlockError::UnevenSize { .. } => "uneven_size",
            BlockError::DepthTooLarge { .. } => "depth_too_large",
            BlockError::OutOfRange { .. } => "out_of_range",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BlockError::UnevenSize { .. } => "board size must be divisible by 2^max_depth",
            BlockError::DepthTooLarge { .. } => "max depth exceeds the supported limit",
            BlockError::OutOfRange { .. } => "board extends past the coordinate range",
        }
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockError::UnevenSize { size, max_depth } => {
                write!(f, "{} (size {}, max depth {})", self.message(), size, max_depth)
            }
            BlockError::DepthTooLarge { max_depth, limit } => {
                write!(f, "{} ({} > {})", self.message(), max_depth, limit)
            }
            BlockError::OutOfRange { position, size } => write!(
                f,
                "{} (position ({}, {}), size {})",
                self.message(),
                position.0,
                position.1,
                size
            ),
        }
    }
}

impl std::error::Error for BlockError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalError {
    /// More goals requested than there are distinct palette colours
    TooManyGoals { requested: usize, available: usize },
}

impl GoalError {
    pub fn code(self) -> &'static str {
        match self {
            GoalError::TooManyGoals { .. } => "too_many_goals",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GoalError::TooManyGoals { .. } => "not enough distinct colours for every goal",
        }
    }
}

impl fmt::Display for GoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GoalError::TooManyGoals {
                requested,
                available,
            } => write!(
                f,
                "{}: requested {}, palette has {}",
                self.message(),
                requested,
                available
            ),
        }
    }
}

impl std::error::Error for GoalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details() {
        let err = BlockError::UnevenSize {
            size: 750,
            max_depth: 2,
        };
        assert_eq!(err.code(), "uneven_size");
        assert!(err.to_string().contains("750"));

        let err = BlockError::OutOfRange {
            position: (u32::MAX - 1, 0),
            size: 4,
        };
        assert_eq!(err.code(), "out_of_range");
        assert!(err.to_string().contains("size 4"));

        let err = GoalError::TooManyGoals {
            requested: 5,
            available: 4,
        };
        assert_eq!(err.code(), "too_many_goals");
        assert!(err.to_string().contains("requested 5"));
    }
}
