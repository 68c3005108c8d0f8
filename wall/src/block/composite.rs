use crate::block::Block;

/// A block made of other blocks.
/// The children are fixed at construction and keep their insertion order.
/// Composite blocks have no color or material.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositeBlock {
    children: Vec<Block>,
}

impl CompositeBlock {
    pub fn new(children: Vec<Block>) -> Self {
        CompositeBlock { children }
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
