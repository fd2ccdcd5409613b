//! Block module - the quadtree board
//!
//! A block is a square region of the board. It is either a leaf with a single colour or
//! subdivided into exactly four children stored in [`Quadrant`] order
//! (top-right, top-left, bottom-left, bottom-right). Each child owns its own subtree;
//! there are no parent pointers.
//!
//! Coordinates are pixels with the origin in the top-left corner. A block covers the
//! half-open square `[x, x + size) x [y, y + size)`.
//!
//! Every mutation returns `true` when the move happened and `false` when it was illegal,
//! in which case the tree is left untouched.

use arrayvec::ArrayVec;
use log::trace;
use rand::Rng;

use crate::error::BlockError;
use crate::rng::random_colour;
use crate::types::{
    palette_index, Colour, Quadrant, RotateDirection, SwapDirection, MAX_SUPPORTED_DEPTH,
    SUBDIVIDE_DECAY,
};

/// Child indices from a block down to a descendant
type Path = ArrayVec<usize, { MAX_SUPPORTED_DEPTH as usize }>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Leaf(Colour),
    Split(Box<[Block; 4]>),
}

/// A node of the board quadtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Top-left corner in pixels
    position: (u32, u32),
    /// Side length in pixels
    size: u32,
    /// Depth from the root (root = 0)
    level: u8,
    /// Depth limit shared by the whole tree
    max_depth: u8,
    content: Content,
}

impl Block {
    /// Create a root leaf
    ///
    /// `size` must be divisible by `2^max_depth` so that every descendant has an exact
    /// integer side, and the square must fit inside the `u32` coordinate range.
    pub fn new(
        position: (u32, u32),
        size: u32,
        colour: Colour,
        max_depth: u8,
    ) -> Result<Self, BlockError> {
        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(BlockError::DepthTooLarge {
                max_depth,
                limit: MAX_SUPPORTED_DEPTH,
            });
        }
        if size == 0 || size % (1u32 << max_depth) != 0 {
            return Err(BlockError::UnevenSize { size, max_depth });
        }
        if position.0.checked_add(size).is_none() || position.1.checked_add(size).is_none() {
            return Err(BlockError::OutOfRange { position, size });
        }
        Ok(Self::leaf(position, size, colour, 0, max_depth))
    }

    /// Create a random board anchored at the origin
    ///
    /// A block above `max_depth` is subdivided with probability
    /// `exp(-SUBDIVIDE_DECAY * level)`, so the root is always split when it can be.
    /// Undivided blocks get a uniformly random palette colour.
    pub fn random<R: Rng>(size: u32, max_depth: u8, rng: &mut R) -> Result<Self, BlockError> {
        let colour = random_colour(rng);
        let mut board = Self::new((0, 0), size, colour, max_depth)?;
        board.fill_random(rng);
        Ok(board)
    }

    fn leaf(position: (u32, u32), size: u32, colour: Colour, level: u8, max_depth: u8) -> Self {
        Self {
            position,
            size,
            level,
            max_depth,
            content: Content::Leaf(colour),
        }
    }

    fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        let split_chance = (-SUBDIVIDE_DECAY * f64::from(self.level)).exp();
        if self.level < self.max_depth && rng.random_bool(split_chance) {
            self.smash(rng);
            if let Content::Split(children) = &mut self.content {
                for child in children.iter_mut() {
                    child.fill_random(rng);
                }
            }
        } else {
            self.content = Content::Leaf(random_colour(rng));
        }
    }

    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Colour of a leaf, `None` for a subdivided block
    pub fn colour(&self) -> Option<Colour> {
        match self.content {
            Content::Leaf(colour) => Some(colour),
            Content::Split(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    /// Children in quadrant order; empty for a leaf
    pub fn children(&self) -> &[Block] {
        match &self.content {
            Content::Leaf(_) => &[],
            Content::Split(children) => &children[..],
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Block> {
        self.children().get(quadrant.index())
    }

    pub fn child_mut(&mut self, quadrant: Quadrant) -> Option<&mut Block> {
        match &mut self.content {
            Content::Leaf(_) => None,
            Content::Split(children) => Some(&mut children[quadrant.index()]),
        }
    }

    /// Side length of each child in pixels
    fn child_size(&self) -> u32 {
        self.size / 2
    }

    /// Top-left corner of the child slot for `quadrant`
    fn child_position(&self, quadrant: Quadrant) -> (u32, u32) {
        let half = self.child_size();
        let (dx, dy) = quadrant.offset();
        (self.position.0 + dx * half, self.position.1 + dy * half)
    }

    /// Whether `location` lies in this block (top and left edges included)
    pub fn contains(&self, location: (u32, u32)) -> bool {
        location.0 >= self.position.0
            && location.1 >= self.position.1
            && location.0 - self.position.0 < self.size
            && location.1 - self.position.1 < self.size
    }

    /// Whether [`Block::smash`] would succeed
    pub fn smashable(&self) -> bool {
        self.is_leaf() && self.level < self.max_depth
    }

    /// Subdivide a leaf into four leaves with the given colours (quadrant order)
    ///
    /// Same legality as [`Block::smash`].
    pub fn split_with(&mut self, colours: [Colour; 4]) -> bool {
        if !self.smashable() {
            return false;
        }
        let size = self.child_size();
        let level = self.level + 1;
        let children = Quadrant::ALL.map(|q| {
            Block::leaf(
                self.child_position(q),
                size,
                colours[q.index()],
                level,
                self.max_depth,
            )
        });
        self.content = Content::Split(Box::new(children));
        true
    }

    /// Subdivide a leaf into four leaves of independent random palette colours
    pub fn smash<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.smashable() {
            trace!("smash rejected at level {}", self.level);
            return false;
        }
        let colours = [(); 4].map(|_| random_colour(&mut *rng));
        self.split_with(colours)
    }

    /// Exchange the contents of the children across `direction`
    pub fn swap(&mut self, direction: SwapDirection) -> bool {
        let Content::Split(children) = &mut self.content else {
            trace!("swap rejected on a leaf");
            return false;
        };
        match direction {
            SwapDirection::Vertical => {
                children.swap(Quadrant::TopRight.index(), Quadrant::BottomRight.index());
                children.swap(Quadrant::TopLeft.index(), Quadrant::BottomLeft.index());
            }
            SwapDirection::Horizontal => {
                children.swap(Quadrant::TopRight.index(), Quadrant::TopLeft.index());
                children.swap(Quadrant::BottomLeft.index(), Quadrant::BottomRight.index());
            }
        }
        self.reanchor_children();
        true
    }

    /// Move the children's contents one quarter-turn around the quadrant ring
    ///
    /// Clockwise sends top-right to bottom-right, bottom-right to bottom-left,
    /// bottom-left to top-left and top-left to top-right.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        let Content::Split(children) = &mut self.content else {
            trace!("rotate rejected on a leaf");
            return false;
        };
        match direction {
            RotateDirection::Clockwise => children.rotate_left(1),
            RotateDirection::CounterClockwise => children.rotate_right(1),
        }
        self.reanchor_children();
        true
    }

    /// Collapse four leaf children into one leaf of their most frequent colour
    ///
    /// Ties go to the colour with the lowest palette index; colours outside the palette
    /// rank after every palette colour, in child order.
    pub fn combine(&mut self) -> bool {
        let Content::Split(children) = &self.content else {
            trace!("combine rejected on a leaf");
            return false;
        };

        // (colour, count, rank) in order of first occurrence
        let mut tally: ArrayVec<(Colour, u8, usize), 4> = ArrayVec::new();
        for child in children.iter() {
            let Some(colour) = child.colour() else {
                trace!("combine rejected: child at level {} is split", child.level);
                return false;
            };
            match tally.iter_mut().find(|(c, _, _)| *c == colour) {
                Some(entry) => entry.1 += 1,
                None => tally.push((colour, 1, palette_index(colour).unwrap_or(usize::MAX))),
            }
        }

        let mut best = tally[0];
        for &entry in &tally[1..] {
            if entry.1 > best.1 || (entry.1 == best.1 && entry.2 < best.2) {
                best = entry;
            }
        }
        self.content = Content::Leaf(best.0);
        true
    }

    /// Recolour a leaf
    pub fn paint(&mut self, colour: Colour) -> bool {
        match &mut self.content {
            Content::Leaf(current) => {
                *current = colour;
                true
            }
            Content::Split(_) => {
                trace!("paint rejected on a split block");
                false
            }
        }
    }

    /// Fully independent copy of this subtree
    pub fn create_copy(&self) -> Block {
        self.clone()
    }

    /// Block at `level` containing `location`
    ///
    /// When the tree is shallower than `level` at that point, the deepest block there is
    /// returned. `None` when `location` is outside this block.
    pub fn get_block_at(&self, location: (u32, u32), level: u8) -> Option<&Block> {
        if !self.contains(location) {
            return None;
        }
        let mut block = self;
        while block.level < level {
            match block.children().iter().find(|c| c.contains(location)) {
                Some(child) => block = child,
                None => break,
            }
        }
        Some(block)
    }

    /// Mutable counterpart of [`Block::get_block_at`]
    pub fn get_block_at_mut(&mut self, location: (u32, u32), level: u8) -> Option<&mut Block> {
        let path = self.path_to(location, level)?;
        let mut block = self;
        for index in path {
            block = match &mut block.content {
                Content::Split(children) => &mut children[index],
                Content::Leaf(_) => return None,
            };
        }
        Some(block)
    }

    fn path_to(&self, location: (u32, u32), level: u8) -> Option<Path> {
        if !self.contains(location) {
            return None;
        }
        let mut path = Path::new();
        let mut block = self;
        while block.level < level {
            let Some(index) = block.children().iter().position(|c| c.contains(location)) else {
                break;
            };
            path.push(index);
            block = &block.children()[index];
        }
        Some(path)
    }

    /// Every leaf of this subtree, in quadrant order
    pub fn leaves(&self) -> Vec<&Block> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(block) = stack.pop() {
            if block.is_leaf() {
                leaves.push(block);
            } else {
                stack.extend(block.children().iter().rev());
            }
        }
        leaves
    }

    /// Re-derive every child's position from this block's slots
    fn reanchor_children(&mut self) {
        let slots = Quadrant::ALL.map(|q| self.child_position(q));
        if let Content::Split(children) = &mut self.content {
            for (child, slot) in children.iter_mut().zip(slots) {
                child.move_to(slot);
            }
        }
    }

    fn move_to(&mut self, position: (u32, u32)) {
        if self.position == position {
            return;
        }
        self.position = position;
        self.reanchor_children();
    }
}
