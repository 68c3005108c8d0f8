use clap::ValueEnum;

use wall::{Block, Wall};

/// Built-in walls the CLI can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// Three atomic blocks, no nesting
    Flat,
    /// Four atomic blocks and a composite holding another composite
    Nested,
    /// No blocks at all
    Empty,
}

impl Sample {
    pub fn build(self) -> Wall {
        match self {
            Sample::Flat => Wall::new(vec![
                Block::atomic("Blue", "Wood"),
                Block::atomic("Red", "Metal"),
                Block::atomic("Green", "Stone"),
            ]),
            Sample::Nested => Wall::new(vec![
                Block::atomic("Yellow", "Metal"),
                Block::atomic("Pink", "Stone"),
                Block::atomic("Orange", "Stone"),
                Block::atomic("Red", "Metal"),
                Block::composite(vec![
                    Block::atomic("Purple", "Wood"),
                    Block::atomic("Purple", "Metal"),
                    Block::atomic("Yellow", "Stone"),
                    Block::composite(vec![
                        Block::atomic("Blue", "Wood"),
                        Block::atomic("Blue", "Metal"),
                        Block::atomic("Green", "Stone"),
                        Block::atomic("Green", "Stone"),
                    ]),
                ]),
            ]),
            Sample::Empty => Wall::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sizes() {
        assert_eq!(Sample::Flat.build().count(), 3);
        assert_eq!(Sample::Nested.build().count(), 13);
        assert_eq!(Sample::Empty.build().count(), 0);
    }
}
