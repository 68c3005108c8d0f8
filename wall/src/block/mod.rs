pub mod atomic;
pub mod composite;

use std::fmt;

use crate::block::atomic::AtomicBlock;
use crate::block::composite::CompositeBlock;
use crate::error::{WallError, WallResult};

/// A single node of a wall.
/// Atomic blocks are leaves with a color and a material; composite blocks
/// group further blocks and carry neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Atomic(AtomicBlock),
    Composite(CompositeBlock),
}

impl Block {
    pub fn atomic(color: impl Into<String>, material: impl Into<String>) -> Self {
        Block::Atomic(AtomicBlock::new(color, material))
    }

    pub fn composite(children: Vec<Block>) -> Self {
        Block::Composite(CompositeBlock::new(children))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Block::Composite(_))
    }

    /// The block's color. Fails for a composite block, which has none.
    pub fn color(&self) -> WallResult<&str> {
        match self {
            Block::Atomic(atomic) => Ok(atomic.color()),
            Block::Composite(_) => Err(WallError::UnsupportedOperation(
                "composite block has no color".to_string(),
            )),
        }
    }

    /// The block's material. Fails for a composite block, which has none.
    pub fn material(&self) -> WallResult<&str> {
        match self {
            Block::Atomic(atomic) => Ok(atomic.material()),
            Block::Composite(_) => Err(WallError::UnsupportedOperation(
                "composite block has no material".to_string(),
            )),
        }
    }

    /// Direct children of a composite block; empty for an atomic block.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Atomic(_) => &[],
            Block::Composite(composite) => composite.children(),
        }
    }
}

impl From<AtomicBlock> for Block {
    fn from(atomic: AtomicBlock) -> Self {
        Block::Atomic(atomic)
    }
}

impl From<CompositeBlock> for Block {
    fn from(composite: CompositeBlock) -> Self {
        Block::Composite(composite)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Atomic(atomic) => write!(f, "{}/{}", atomic.color(), atomic.material()),
            Block::Composite(composite) => {
                write!(f, "[")?;
                for (i, child) in composite.children().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_accessors_return_stored_values() {
        let block = Block::atomic("Pink", "Stone");
        assert!(!block.is_composite());
        assert_eq!(block.color(), Ok("Pink"));
        assert_eq!(block.material(), Ok("Stone"));
        assert!(block.children().is_empty());
    }

    #[test]
    fn composite_has_no_color_or_material() {
        let block = Block::composite(vec![Block::atomic("Blue", "Wood")]);
        assert!(block.is_composite());
        assert_eq!(
            block.color(),
            Err(WallError::UnsupportedOperation(
                "composite block has no color".to_string()
            ))
        );
        assert!(matches!(
            block.material(),
            Err(WallError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn empty_composite_accessors_still_fail() {
        let block = Block::composite(Vec::new());
        assert!(block.color().is_err());
        assert!(block.material().is_err());
        assert!(block.children().is_empty());
    }

    #[test]
    fn composite_keeps_child_order() {
        let block = Block::composite(vec![
            Block::atomic("Red", "Metal"),
            Block::atomic("Blue", "Wood"),
        ]);
        let colors: Vec<_> = block
            .children()
            .iter()
            .map(|child| child.color().unwrap())
            .collect();
        assert_eq!(colors, ["Red", "Blue"]);
    }

    #[test]
    fn display() {
        let block = Block::composite(vec![
            Block::atomic("Red", "Metal"),
            Block::composite(vec![Block::atomic("Blue", "Wood")]),
            Block::composite(Vec::new()),
        ]);
        assert_eq!(block.to_string(), "[Red/Metal, [Blue/Wood], []]");
    }
}
