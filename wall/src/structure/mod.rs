mod traversal;

use tracing::debug;

use crate::block::Block;
use crate::error::{WallError, WallResult};

/// A wall: an ordered sequence of top-level blocks and the queries over it.
/// The wall owns the whole tree and never changes it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wall {
    blocks: Vec<Block>,
}

impl Wall {
    pub fn new(blocks: Vec<Block>) -> Self {
        debug!(blocks = blocks.len(), "wall built");
        Wall { blocks }
    }

    /// Build a wall from a block sequence that may be missing.
    /// `None` is rejected; an empty sequence is a valid, empty wall.
    pub fn from_blocks(blocks: Option<Vec<Block>>) -> WallResult<Self> {
        match blocks {
            Some(blocks) => Ok(Wall::new(blocks)),
            None => Err(WallError::InvalidArgument(
                "blocks cannot be null".to_string(),
            )),
        }
    }

    /// Top-level blocks, in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Find the first atomic block with exactly this color.
    ///
    /// Only one level of nesting is unwrapped: top-level atomic blocks and the
    /// atomic children of top-level composites are tested, in order. Composites
    /// nested inside a top-level composite are skipped.
    pub fn find_by_color(&self, color: &str) -> Option<&Block> {
        let found = traversal::flatten_one_level(&self.blocks).find(|block| match block {
            Block::Atomic(atomic) => atomic.color() == color,
            Block::Composite(_) => false,
        });
        debug!(color, found = found.is_some(), "find_by_color");
        found
    }

    /// Collect every atomic block made of this material, at any depth,
    /// in depth-first pre-order.
    pub fn find_by_material(&self, material: &str) -> Vec<&Block> {
        let mut matches = Vec::new();
        if material.is_empty() {
            return matches;
        }
        for block in &self.blocks {
            traversal::collect_by_material(block, material, &mut matches);
        }
        debug!(material, matches = matches.len(), "find_by_material");
        matches
    }

    /// Total number of nodes in the wall, composites included.
    pub fn count(&self) -> usize {
        let total: usize = self.blocks.iter().map(traversal::count_nodes).sum();
        debug!(total, "count");
        total
    }
}

impl TryFrom<Option<Vec<Block>>> for Wall {
    type Error = WallError;

    fn try_from(blocks: Option<Vec<Block>>) -> WallResult<Self> {
        Wall::from_blocks(blocks)
    }
}

impl From<Vec<Block>> for Wall {
    fn from(blocks: Vec<Block>) -> Self {
        Wall::new(blocks)
    }
}
