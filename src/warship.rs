//! Warship definition: a fixed set of blocks that can be hit and sunk.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coordinate, WarshipError};

/// How strictly a block list is checked when a warship is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Any non-empty list of distinct cells.
    Lenient,
    /// Additionally, every block must share an edge with the one before it.
    Connected,
    /// Connected, and every block on one row or one column.
    #[default]
    Straight,
}

/// A warship occupying `blocks`, with the blocks struck so far.
#[derive(Clone, PartialEq, Eq)]
pub struct Warship {
    blocks: Vec<Coordinate>,
    hit_blocks: Vec<Coordinate>,
}

impl Warship {
    /// Build a warship with the default [`ShapePolicy::Straight`] policy.
    pub fn new(blocks: Vec<Coordinate>) -> Result<Self, WarshipError> {
        Self::with_policy(blocks, ShapePolicy::default())
    }

    /// Build a warship, validating `blocks` against `policy`.
    pub fn with_policy(blocks: Vec<Coordinate>, policy: ShapePolicy) -> Result<Self, WarshipError> {
        if blocks.is_empty() {
            return Err(WarshipError::EmptyShape);
        }
        for (i, block) in blocks.iter().enumerate() {
            if blocks[..i].contains(block) {
                return Err(WarshipError::DuplicateBlock(*block));
            }
        }
        let connected = blocks.windows(2).all(|w| w[0].is_adjacent(&w[1]));
        let in_line = blocks.iter().all(|b| b.x == blocks[0].x)
            || blocks.iter().all(|b| b.y == blocks[0].y);
        let valid = match policy {
            ShapePolicy::Lenient => true,
            ShapePolicy::Connected => connected,
            ShapePolicy::Straight => connected && in_line,
        };
        if !valid {
            return Err(WarshipError::InvalidShape(blocks));
        }
        Ok(Warship {
            blocks,
            hit_blocks: Vec::new(),
        })
    }

    pub fn blocks(&self) -> &[Coordinate] {
        &self.blocks
    }

    pub fn size(&self) -> usize {
        self.blocks.len()
    }

    /// Number of distinct blocks struck.
    pub fn hits(&self) -> usize {
        self.hit_blocks.len()
    }

    pub fn hit_blocks(&self) -> &[Coordinate] {
        &self.hit_blocks
    }

    pub fn occupies(&self, coordinate: Coordinate) -> bool {
        self.blocks.contains(&coordinate)
    }

    /// Register a shot at `coordinate`.
    /// Returns `true` only if it struck a block that was not hit before.
    pub fn register_hit(&mut self, coordinate: Coordinate) -> bool {
        if !self.occupies(coordinate) || self.hit_blocks.contains(&coordinate) {
            return false;
        }
        self.hit_blocks.push(coordinate);
        true
    }

    /// Check if the warship is sunk (all blocks hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_blocks.len() == self.blocks.len()
    }

    /// Label such as `3 mast warship`.
    pub fn describe(&self) -> alloc::string::String {
        alloc::format!("{}", self)
    }
}

impl fmt::Display for Warship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mast warship", self.size())
    }
}

impl fmt::Debug for Warship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warship {{ blocks: [")?;
        for (i, b) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", b)?;
        }
        write!(f, "], hits: {}, sunk: {} }}", self.hits(), self.is_sunk())
    }
}
