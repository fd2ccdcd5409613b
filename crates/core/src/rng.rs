//! RNG module - palette draws
//!
//! Every random decision in the core takes the generator as a parameter so that
//! callers can inject a seeded [`StdRng`] per component and replay games exactly.
//!
//! [`ColourBag`] hands out palette colours without replacement, which is how goals
//! get pairwise distinct colours.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{Colour, PALETTE};

/// Create a deterministic generator from a seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniformly random palette colour
pub fn random_colour<R: Rng>(rng: &mut R) -> Colour {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

/// Shuffled palette drawn from front to back, never refilled
#[derive(Debug, Clone)]
pub struct ColourBag {
    bag: [Colour; PALETTE.len()],
    bag_index: usize,
}

impl ColourBag {
    /// Create a bag holding every palette colour in random order
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut bag = PALETTE;
        bag.shuffle(rng);
        Self { bag, bag_index: 0 }
    }

    /// Peek at the next colour without removing it
    pub fn peek(&self) -> Option<Colour> {
        self.bag.get(self.bag_index).copied()
    }

    /// Take the next colour, `None` once the palette is exhausted
    pub fn draw(&mut self) -> Option<Colour> {
        let colour = self.peek()?;
        self.bag_index += 1;
        Some(colour)
    }

    /// Number of colours left to draw
    pub fn remaining(&self) -> usize {
        self.bag.len() - self.bag_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = seeded(12345);
        let mut rng2 = seeded(12345);

        for _ in 0..100 {
            assert_eq!(random_colour(&mut rng1), random_colour(&mut rng2));
        }
    }

    #[test]
    fn test_random_colour_covers_palette() {
        let mut rng = seeded(3);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let colour = random_colour(&mut rng);
            assert!(PALETTE.contains(&colour));
            if !seen.contains(&colour) {
                seen.push(colour);
            }
        }
        assert_eq!(seen.len(), PALETTE.len());
    }

    #[test]
    fn test_colour_bag_draws_each_colour_once() {
        let mut bag = ColourBag::new(&mut seeded(1));
        assert_eq!(bag.remaining(), 4);

        let mut drawn = Vec::new();
        while let Some(colour) = bag.draw() {
            assert!(!drawn.contains(&colour), "Duplicate colour: {:?}", colour);
            drawn.push(colour);
        }

        assert_eq!(drawn.len(), PALETTE.len());
        for colour in PALETTE {
            assert!(drawn.contains(&colour), "Missing colour: {:?}", colour);
        }
        assert_eq!(bag.remaining(), 0);
        assert_eq!(bag.draw(), None);
    }

    #[test]
    fn test_colour_bag_peek() {
        let mut bag = ColourBag::new(&mut seeded(9));

        let peeked = bag.peek().unwrap();
        let drawn = bag.draw().unwrap();

        assert_eq!(peeked, drawn);
        assert_eq!(bag.remaining(), 3);
    }
}
