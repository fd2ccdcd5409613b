//! Snapshot module - renderer-facing view of a board
//!
//! A snapshot lists every leaf as a coloured square in pixel coordinates. External
//! renderers draw the squares in order; nothing here reads snapshots back.

use serde::Serialize;

use crate::block::Block;

/// One leaf of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    pub colour: [u8; 3],
    pub position: (u32, u32),
    pub size: u32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub size: u32,
    pub max_depth: u8,
    /// Leaves in quadrant traversal order
    pub squares: Vec<Square>,
}

impl BoardSnapshot {
    pub fn capture(board: &Block) -> Self {
        let squares = board
            .leaves()
            .into_iter()
            .filter_map(|leaf| {
                leaf.colour().map(|colour| Square {
                    colour: colour.as_array(),
                    position: leaf.position(),
                    size: leaf.size(),
                    level: leaf.level(),
                })
            })
            .collect();
        Self {
            size: board.size(),
            max_depth: board.max_depth(),
            squares,
        }
    }

    /// Total area covered by the squares
    pub fn area(&self) -> u64 {
        self.squares
            .iter()
            .map(|s| u64::from(s.size) * u64::from(s.size))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Quadrant, OLD_OLIVE, PACIFIC_POINT, REAL_RED};

    #[test]
    fn test_single_leaf_snapshot() {
        let board = Block::new((0, 0), 768, REAL_RED, 1).unwrap();
        let snapshot = BoardSnapshot::capture(&board);
        assert_eq!(
            snapshot.squares,
            vec![Square {
                colour: [199, 44, 58],
                position: (0, 0),
                size: 768,
                level: 0,
            }]
        );
    }

    #[test]
    fn test_snapshot_covers_board() {
        let mut board = Block::new((0, 0), 64, PACIFIC_POINT, 2).unwrap();
        board.split_with([REAL_RED, OLD_OLIVE, REAL_RED, PACIFIC_POINT]);
        board
            .child_mut(Quadrant::BottomRight)
            .unwrap()
            .split_with([OLD_OLIVE; 4]);
        let snapshot = BoardSnapshot::capture(&board);
        assert_eq!(snapshot.squares.len(), 7);
        assert_eq!(snapshot.area(), 64 * 64);
        assert_eq!(snapshot.squares[3].position, (48, 32));
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let board = Block::new((0, 0), 64, OLD_OLIVE, 0).unwrap();
        let json = serde_json::to_value(BoardSnapshot::capture(&board)).unwrap();
        assert_eq!(json["size"], 64);
        assert_eq!(json["squares"][0]["colour"], serde_json::json!([138, 151, 71]));
        assert_eq!(json["squares"][0]["position"], serde_json::json!([0, 0]));
    }
}
