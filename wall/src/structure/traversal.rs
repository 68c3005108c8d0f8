use std::slice;

use crate::block::Block;

/// Top-level blocks with each top-level composite replaced by its direct
/// children. Deeper composites come through unchanged.
pub(super) fn flatten_one_level(blocks: &[Block]) -> impl Iterator<Item = &Block> {
    blocks.iter().flat_map(unwrap_composite)
}

fn unwrap_composite(block: &Block) -> &[Block] {
    match block {
        Block::Atomic(_) => slice::from_ref(block),
        Block::Composite(composite) => composite.children(),
    }
}

pub(super) fn collect_by_material<'a>(
    block: &'a Block,
    material: &str,
    matches: &mut Vec<&'a Block>,
) {
    match block {
        Block::Atomic(atomic) => {
            if atomic.material() == material {
                matches.push(block);
            }
        }
        Block::Composite(composite) => {
            for child in composite.children() {
                collect_by_material(child, material, matches);
            }
        }
    }
}

/// Nodes in the subtree rooted at `block`, counting the block itself.
pub(super) fn count_nodes(block: &Block) -> usize {
    match block {
        Block::Atomic(_) => 1,
        Block::Composite(composite) => {
            1 + composite.children().iter().map(count_nodes).sum::<usize>()
        }
    }
}
