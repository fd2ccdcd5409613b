//! Grid module - flattened view of a block
//!
//! Flattening turns a block tree into a square grid of unit cells, one cell per
//! max-depth block. Both goals score this grid instead of walking the tree.
//!
//! The grid is column-major: `get(column, row)` with column 0 on the left and row 0 at
//! the top. Storage is a flat vector indexed by `column * side + row`.

use crate::block::Block;
use crate::types::{Colour, Quadrant, PALETTE};

/// Square grid of unit-cell colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Colour>,
}

impl Grid {
    /// Create a grid filled with one colour
    pub fn filled(side: usize, colour: Colour) -> Self {
        Self {
            side,
            cells: vec![colour; side * side],
        }
    }

    /// Build a grid from columns, `None` unless the input is a non-empty square
    pub fn from_columns(columns: Vec<Vec<Colour>>) -> Option<Self> {
        let side = columns.len();
        if side == 0 || columns.iter().any(|column| column.len() != side) {
            return None;
        }
        Some(Self {
            side,
            cells: columns.into_iter().flatten().collect(),
        })
    }

    #[inline(always)]
    fn index(&self, column: usize, row: usize) -> Option<usize> {
        if column >= self.side || row >= self.side {
            return None;
        }
        Some(column * self.side + row)
    }

    /// Number of cells per side
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cell colour, `None` if out of bounds
    pub fn get(&self, column: usize, row: usize) -> Option<Colour> {
        self.index(column, row).map(|idx| self.cells[idx])
    }

    /// All cells of one column, top to bottom
    pub fn column(&self, column: usize) -> Option<&[Colour]> {
        if column >= self.side {
            return None;
        }
        let start = column * self.side;
        Some(&self.cells[start..start + self.side])
    }

    /// Flat column-major cells
    pub fn cells(&self) -> &[Colour] {
        &self.cells
    }

    /// Convert to a vector of columns
    pub fn to_columns(&self) -> Vec<Vec<Colour>> {
        self.cells.chunks(self.side).map(<[Colour]>::to_vec).collect()
    }

    /// Paint the `side`-cell square whose top-left cell is (`column`, `row`)
    fn fill_square(&mut self, column: usize, row: usize, side: usize, colour: Colour) {
        for c in column..column + side {
            let start = c * self.side + row;
            self.cells[start..start + side].fill(colour);
        }
    }
}

/// Flatten `block` into a grid of side `2^(max_depth - level)`
///
/// A leaf above max depth covers a uniform square of cells. A split block places its
/// top-left and bottom-left children in the left half of the columns and its top-right
/// and bottom-right children in the right half.
pub fn flatten(block: &Block) -> Grid {
    let side = 1usize << (block.max_depth() - block.level());
    // every cell is overwritten by exactly one leaf
    let mut grid = Grid::filled(side, block.colour().unwrap_or(PALETTE[0]));
    paint_into(block, 0, 0, side, &mut grid);
    grid
}

fn paint_into(block: &Block, column: usize, row: usize, side: usize, grid: &mut Grid) {
    match block.colour() {
        Some(colour) => grid.fill_square(column, row, side, colour),
        None => {
            let half = side / 2;
            for (quadrant, child) in Quadrant::ALL.iter().zip(block.children()) {
                let (dx, dy) = quadrant.offset();
                paint_into(
                    child,
                    column + dx as usize * half,
                    row + dy as usize * half,
                    half,
                    grid,
                );
            }
        }
    }
}
