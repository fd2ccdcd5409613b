//! Goal module - scoring a board for one target colour
//!
//! Two goal variants exist and both score the flattened grid:
//!
//! - **Perimeter**: one point per border check that matches. Each of the first column,
//!   last column, first row and last row is checked independently, so a corner cell
//!   can count twice and a 1x1 board counts four times.
//! - **Blob**: size of the largest 4-connected region of the target colour.
//!
//! The blob search marks cells in a parallel [`VisitMap`] with three states so that every
//! cell is examined once per scoring call.

use arrayvec::ArrayVec;
use log::trace;
use rand::Rng;

use crate::block::Block;
use crate::error::GoalError;
use crate::grid::{flatten, Grid};
use crate::rng::ColourBag;
use crate::types::{Colour, PALETTE};

/// Which scoring rule a goal uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalKind {
    Perimeter,
    Blob,
}

/// A scoring rule bound to a target colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    Perimeter(Colour),
    Blob(Colour),
}

impl Goal {
    pub fn new(kind: GoalKind, colour: Colour) -> Self {
        match kind {
            GoalKind::Perimeter => Goal::Perimeter(colour),
            GoalKind::Blob => Goal::Blob(colour),
        }
    }

    pub fn kind(&self) -> GoalKind {
        match self {
            Goal::Perimeter(_) => GoalKind::Perimeter,
            Goal::Blob(_) => GoalKind::Blob,
        }
    }

    /// Target colour
    pub fn colour(&self) -> Colour {
        match *self {
            Goal::Perimeter(colour) | Goal::Blob(colour) => colour,
        }
    }

    /// Score `board`; the board is flattened afresh on every call
    pub fn score(&self, board: &Block) -> u32 {
        self.score_grid(&flatten(board))
    }

    /// Score an already flattened grid
    pub fn score_grid(&self, grid: &Grid) -> u32 {
        match *self {
            Goal::Perimeter(colour) => perimeter_score(grid, colour),
            Goal::Blob(colour) => blob_score(grid, colour),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Goal::Perimeter(colour) => format!(
                "Player gains a point for each {} connected along the perimeter",
                colour
            ),
            Goal::Blob(colour) => {
                format!("Player gains a point for each {} connected together", colour)
            }
        }
    }
}

/// Count border checks whose cell has `colour`
pub fn perimeter_score(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.side();
    if side == 0 {
        return 0;
    }
    let last = side - 1;
    let mut score = 0;
    for i in 0..side {
        for (column, row) in [(i, 0), (i, last), (0, i), (last, i)] {
            if grid.get(column, row) == Some(colour) {
                score += 1;
            }
        }
    }
    score
}

/// Size of the largest 4-connected region of `colour`
pub fn blob_score(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.side();
    let mut visited = VisitMap::new(side);
    let mut best = 0;
    for column in 0..side {
        for row in 0..side {
            if visited.get(column, row) == Some(Visit::Unvisited) {
                best = best.max(undiscovered_blob_size(colour, (column, row), grid, &mut visited));
            }
        }
    }
    best
}

/// Search state of one cell during the blob search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Unvisited,
    /// Visited and of the target colour
    Matches,
    /// Visited and of another colour
    NoMatch,
}

/// Column-major grid of [`Visit`] states, parallel to a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitMap {
    side: usize,
    cells: Vec<Visit>,
}

impl VisitMap {
    /// All cells unvisited
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Visit::Unvisited; side * side],
        }
    }

    /// Build from columns, `None` unless the input is square
    pub fn from_columns(columns: Vec<Vec<Visit>>) -> Option<Self> {
        let side = columns.len();
        if columns.iter().any(|column| column.len() != side) {
            return None;
        }
        Some(Self {
            side,
            cells: columns.into_iter().flatten().collect(),
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Visit> {
        if column >= self.side || row >= self.side {
            return None;
        }
        Some(self.cells[column * self.side + row])
    }

    fn set(&mut self, column: usize, row: usize, visit: Visit) {
        self.cells[column * self.side + row] = visit;
    }

    /// Number of cells in `state`
    pub fn count(&self, state: Visit) -> usize {
        self.cells.iter().filter(|&&v| v == state).count()
    }
}

/// In-bounds 4-neighbours of (`column`, `row`)
fn neighbours(column: usize, row: usize, side: usize) -> ArrayVec<(usize, usize), 4> {
    let mut out = ArrayVec::new();
    if column > 0 {
        out.push((column - 1, row));
    }
    if column + 1 < side {
        out.push((column + 1, row));
    }
    if row > 0 {
        out.push((column, row - 1));
    }
    if row + 1 < side {
        out.push((column, row + 1));
    }
    out
}

/// Size of the blob of `colour` containing `pos`, using only unvisited cells
///
/// Returns 0 when `pos` is out of bounds, already visited, or not of `colour`.
/// Every cell examined is marked [`Visit::Matches`] or [`Visit::NoMatch`] in `visited`.
/// The search uses an explicit stack, so its depth does not grow with the grid area.
pub fn undiscovered_blob_size(
    colour: Colour,
    pos: (usize, usize),
    grid: &Grid,
    visited: &mut VisitMap,
) -> u32 {
    if visited.get(pos.0, pos.1) != Some(Visit::Unvisited) {
        return 0;
    }
    let side = grid.side().min(visited.side());
    let mut size = 0;
    let mut stack = vec![pos];
    while let Some((column, row)) = stack.pop() {
        if visited.get(column, row) != Some(Visit::Unvisited) {
            continue;
        }
        if grid.get(column, row) != Some(colour) {
            visited.set(column, row, Visit::NoMatch);
            continue;
        }
        visited.set(column, row, Visit::Matches);
        size += 1;
        for (c, r) in neighbours(column, row, side) {
            if visited.get(c, r) == Some(Visit::Unvisited) {
                stack.push((c, r));
            }
        }
    }
    size
}

/// Draw `count` goals of one random kind with pairwise distinct palette colours
///
/// Fails when `count` exceeds the palette size.
pub fn generate_goals<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<Goal>, GoalError> {
    if count > PALETTE.len() {
        return Err(GoalError::TooManyGoals {
            requested: count,
            available: PALETTE.len(),
        });
    }
    let kind = if rng.random_bool(0.5) {
        GoalKind::Perimeter
    } else {
        GoalKind::Blob
    };
    let mut bag = ColourBag::new(rng);
    let mut goals = Vec::with_capacity(count);
    while goals.len() < count {
        let colour = bag.draw().ok_or(GoalError::TooManyGoals {
            requested: count,
            available: PALETTE.len(),
        })?;
        goals.push(Goal::new(kind, colour));
    }
    trace!("generated {} {:?} goals", count, kind);
    Ok(goals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::types::{DAFFODIL_DELIGHT, OLD_OLIVE, PACIFIC_POINT, REAL_RED};

    const A: Colour = PACIFIC_POINT;
    const B: Colour = REAL_RED;
    const C: Colour = OLD_OLIVE;
    const D: Colour = DAFFODIL_DELIGHT;

    fn grid(columns: Vec<Vec<Colour>>) -> Grid {
        Grid::from_columns(columns).unwrap()
    }

    #[test]
    fn test_perimeter_counts_corners_twice() {
        let g = grid(vec![vec![A, B, A], vec![B, B, B], vec![A, B, A]]);
        // each corner is on two borders
        assert_eq!(perimeter_score(&g, A), 8);
        assert_eq!(perimeter_score(&g, B), 4);
        assert_eq!(perimeter_score(&g, C), 0);
    }

    #[test]
    fn test_perimeter_single_cell() {
        let g = grid(vec![vec![C]]);
        assert_eq!(perimeter_score(&g, C), 4);
        assert_eq!(perimeter_score(&g, A), 0);
    }

    #[test]
    fn test_blob_ignores_diagonals() {
        let g = grid(vec![vec![A, B, A], vec![B, A, B], vec![A, B, A]]);
        assert_eq!(blob_score(&g, A), 1);
        assert_eq!(blob_score(&g, B), 1);
    }

    #[test]
    fn test_blob_finds_largest_region() {
        let g = grid(vec![
            vec![A, A, B, A],
            vec![B, A, B, A],
            vec![B, B, B, A],
            vec![A, A, B, A],
        ]);
        assert_eq!(blob_score(&g, B), 7);
        assert_eq!(blob_score(&g, A), 4);
        assert_eq!(blob_score(&g, D), 0);
    }

    #[test]
    fn test_undiscovered_blob_size_marks_cells() {
        let g = grid(vec![vec![A, A], vec![B, A]]);
        let mut visited = VisitMap::new(2);
        assert_eq!(undiscovered_blob_size(A, (0, 0), &g, &mut visited), 3);
        assert_eq!(visited.get(1, 0), Some(Visit::NoMatch));
        assert_eq!(visited.count(Visit::Matches), 3);
        assert_eq!(visited.count(Visit::Unvisited), 0);

        // already visited and out of bounds contribute nothing
        assert_eq!(undiscovered_blob_size(A, (0, 1), &g, &mut visited), 0);
        assert_eq!(undiscovered_blob_size(A, (5, 0), &g, &mut visited), 0);
    }

    #[test]
    fn test_undiscovered_blob_size_non_matching_start() {
        let g = grid(vec![vec![A, A], vec![B, A]]);
        let mut visited = VisitMap::new(2);
        assert_eq!(undiscovered_blob_size(A, (1, 0), &g, &mut visited), 0);
        assert_eq!(visited.get(1, 0), Some(Visit::NoMatch));
        assert_eq!(visited.count(Visit::Unvisited), 3);
    }

    #[test]
    fn test_goal_accessors_and_description() {
        let goal = Goal::new(GoalKind::Blob, B);
        assert_eq!(goal, Goal::Blob(B));
        assert_eq!(goal.kind(), GoalKind::Blob);
        assert_eq!(goal.colour(), B);
        assert_eq!(
            goal.description(),
            "Player gains a point for each Real Red connected together"
        );
        assert_eq!(
            Goal::Perimeter(A).description(),
            "Player gains a point for each Pacific Point connected along the perimeter"
        );
    }

    #[test]
    fn test_generate_goals_distinct_and_uniform_kind() {
        let mut rng = seeded(5);
        for count in 0..=PALETTE.len() {
            let goals = generate_goals(count, &mut rng).unwrap();
            assert_eq!(goals.len(), count);
            for (i, goal) in goals.iter().enumerate() {
                assert_eq!(goal.kind(), goals[0].kind());
                assert!(goals[i + 1..].iter().all(|g| g.colour() != goal.colour()));
            }
        }
    }

    #[test]
    fn test_generate_goals_too_many() {
        assert_eq!(
            generate_goals(PALETTE.len() + 1, &mut seeded(1)),
            Err(GoalError::TooManyGoals {
                requested: 5,
                available: 4
            })
        );
    }
}
