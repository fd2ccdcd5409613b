use std::fmt;

use log::debug;
use rand::Rng;

use crate::core::Block;
use crate::types::{Action, Colour, RotateDirection, SwapDirection};

/// An action aimed at the block found at `location` and `level`
///
/// Moves hold no reference into the board; the target is looked up again when the move
/// is applied, so the same move can be tried on a copy and then on the real board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub action: Action,
    pub location: (u32, u32),
    pub level: u8,
}

impl Move {
    pub fn new(action: Action, location: (u32, u32), level: u8) -> Self {
        Self {
            action,
            location,
            level,
        }
    }

    pub fn pass() -> Self {
        Self::new(Action::Pass, (0, 0), 0)
    }

    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            return f.write_str("pass");
        }
        write!(
            f,
            "{} at ({}, {}) level {}",
            self.action, self.location.0, self.location.1, self.level
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No block at the move's location
    NoBlock,
    /// The selected block does not allow this action
    Illegal(Action),
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::NoBlock => "no_block",
            MoveError::Illegal(_) => "illegal_move",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::NoBlock => "location is outside the board",
            MoveError::Illegal(_) => "action is not legal on the selected block",
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoBlock => f.write_str(self.message()),
            MoveError::Illegal(action) => write!(f, "{}: {}", self.message(), action),
        }
    }
}

impl std::error::Error for MoveError {}

/// Apply `mv` to `board`
///
/// Paint uses `paint_colour`; smash draws its colours from `rng`. A pass always succeeds
/// and leaves the board untouched. On error the board is unchanged.
pub fn apply_move<R: Rng>(
    board: &mut Block,
    mv: &Move,
    paint_colour: Colour,
    rng: &mut R,
) -> Result<(), MoveError> {
    if mv.is_pass() {
        return Ok(());
    }

    let block = board
        .get_block_at_mut(mv.location, mv.level)
        .ok_or(MoveError::NoBlock)?;

    let applied = match mv.action {
        Action::RotateClockwise => block.rotate(RotateDirection::Clockwise),
        Action::RotateCounterClockwise => block.rotate(RotateDirection::CounterClockwise),
        Action::SwapHorizontal => block.swap(SwapDirection::Horizontal),
        Action::SwapVertical => block.swap(SwapDirection::Vertical),
        Action::Smash => block.smash(rng),
        Action::Paint => block.paint(paint_colour),
        Action::Combine => block.combine(),
        Action::Pass => true,
    };

    if !applied {
        debug!("rejected {}", mv);
        return Err(MoveError::Illegal(mv.action));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::seeded;
    use crate::types::{Quadrant, DAFFODIL_DELIGHT, OLD_OLIVE, PACIFIC_POINT, REAL_RED};

    fn board() -> Block {
        let mut board = Block::new((0, 0), 64, PACIFIC_POINT, 2).unwrap();
        board.split_with([PACIFIC_POINT, REAL_RED, OLD_OLIVE, DAFFODIL_DELIGHT]);
        board
    }

    #[test]
    fn pass_leaves_board_untouched() {
        let mut b = board();
        let before = b.clone();
        assert_eq!(
            apply_move(&mut b, &Move::pass(), REAL_RED, &mut seeded(1)),
            Ok(())
        );
        assert_eq!(b, before);
    }

    #[test]
    fn move_rejected_outside_board() {
        let mut b = board();
        let mv = Move::new(Action::Paint, (64, 10), 1);
        let err = apply_move(&mut b, &mv, REAL_RED, &mut seeded(1)).unwrap_err();
        assert!(matches!(err, MoveError::NoBlock));
        assert_eq!(err.code(), "no_block");
    }

    #[test]
    fn illegal_move_reports_action() {
        let mut b = board();
        let before = b.clone();
        let mv = Move::new(Action::Paint, (10, 10), 0);
        let err = apply_move(&mut b, &mv, REAL_RED, &mut seeded(1)).unwrap_err();
        assert_eq!(err, MoveError::Illegal(Action::Paint));
        assert_eq!(err.code(), "illegal_move");
        assert_eq!(b, before);
    }

    #[test]
    fn moves_target_selected_block() {
        let mut b = board();
        let mut rng = seeded(1);

        let paint = Move::new(Action::Paint, (40, 40), 1);
        apply_move(&mut b, &paint, REAL_RED, &mut rng).unwrap();
        assert_eq!(b.child(Quadrant::BottomRight).unwrap().colour(), Some(REAL_RED));

        let rotate = Move::new(Action::RotateClockwise, (40, 40), 0);
        apply_move(&mut b, &rotate, REAL_RED, &mut rng).unwrap();
        assert_eq!(b.child(Quadrant::BottomRight).unwrap().colour(), Some(PACIFIC_POINT));

        let smash = Move::new(Action::Smash, (0, 0), 1);
        apply_move(&mut b, &smash, REAL_RED, &mut rng).unwrap();
        assert_eq!(b.child(Quadrant::TopLeft).unwrap().children().len(), 4);

        let combine = Move::new(Action::Combine, (0, 0), 1);
        apply_move(&mut b, &combine, REAL_RED, &mut rng).unwrap();
        assert!(b.child(Quadrant::TopLeft).unwrap().is_leaf());
    }

    #[test]
    fn move_display() {
        assert_eq!(Move::pass().to_string(), "pass");
        assert_eq!(
            Move::new(Action::SwapVertical, (3, 4), 2).to_string(),
            "swapVertical at (3, 4) level 2"
        );
    }
}
