//! Automated players
//!
//! Both players search for moves on deep copies of the board and never mutate the board
//! they are given. Each player owns a seeded generator so a game replays exactly.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{Block, Goal};
use crate::moves::{apply_move, Move};
use crate::types::{Action, Colour, MAX_MOVE_ATTEMPTS};

/// A participant that proposes one move per turn
pub trait Player {
    fn id(&self) -> usize;

    fn goal(&self) -> Goal;

    /// Propose a move for `board` without changing it
    fn generate_move(&mut self, board: &Block) -> Move;
}

/// Pick a random level, location and action and try it on a copy of `board`
///
/// Returns the move together with the copy it produced, or `None` if the move was
/// illegal.
pub fn try_random_move<R: Rng>(
    board: &Block,
    paint_colour: Colour,
    rng: &mut R,
) -> Option<(Move, Block)> {
    let level = rng.random_range(board.level()..=board.max_depth());
    let (x, y) = board.position();
    let location = (
        x + rng.random_range(0..board.size()),
        y + rng.random_range(0..board.size()),
    );
    let action = Action::MOVES[rng.random_range(0..Action::MOVES.len())];
    let mv = Move::new(action, location, level);

    let mut copy = board.create_copy();
    apply_move(&mut copy, &mv, paint_colour, rng).ok()?;
    Some((mv, copy))
}

/// Keep trying random moves until one is legal, at most [`MAX_MOVE_ATTEMPTS`] times
pub fn random_valid_move<R: Rng>(
    board: &Block,
    paint_colour: Colour,
    rng: &mut R,
) -> Option<(Move, Block)> {
    (0..MAX_MOVE_ATTEMPTS).find_map(|_| try_random_move(board, paint_colour, &mut *rng))
}

/// Plays a uniformly random legal move every turn
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    id: usize,
    goal: Goal,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(id: usize, goal: Goal, seed: u64) -> Self {
        Self {
            id,
            goal,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn id(&self) -> usize {
        self.id
    }

    fn goal(&self) -> Goal {
        self.goal
    }

    fn generate_move(&mut self, board: &Block) -> Move {
        match random_valid_move(board, self.goal.colour(), &mut self.rng) {
            Some((mv, _)) => {
                debug!("random player {} chose {}", self.id, mv);
                mv
            }
            None => {
                warn!(
                    "random player {} found no legal move in {} attempts",
                    self.id, MAX_MOVE_ATTEMPTS
                );
                Move::pass()
            }
        }
    }
}

/// Samples `difficulty` legal moves and plays the one that scores best for its goal
///
/// Passes unless some candidate strictly beats the current score. Among equal
/// candidates the first one sampled wins.
#[derive(Debug, Clone)]
pub struct SmartPlayer {
    id: usize,
    goal: Goal,
    difficulty: usize,
    rng: StdRng,
}

impl SmartPlayer {
    pub fn new(id: usize, goal: Goal, difficulty: usize, seed: u64) -> Self {
        Self {
            id,
            goal,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }
}

impl Player for SmartPlayer {
    fn id(&self) -> usize {
        self.id
    }

    fn goal(&self) -> Goal {
        self.goal
    }

    fn generate_move(&mut self, board: &Block) -> Move {
        let current = self.goal.score(board);
        let mut best: Option<(u32, Move)> = None;

        for _ in 0..self.difficulty {
            let Some((mv, result)) = random_valid_move(board, self.goal.colour(), &mut self.rng)
            else {
                continue;
            };
            let score = self.goal.score(&result);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, mv));
            }
        }

        match best {
            Some((score, mv)) if score > current => {
                debug!(
                    "smart player {} chose {} ({} -> {})",
                    self.id, mv, current, score
                );
                mv
            }
            _ => {
                debug!("smart player {} passes at score {}", self.id, current);
                Move::pass()
            }
        }
    }
}
