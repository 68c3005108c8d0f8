pub mod block;
pub mod error;
pub mod structure;

pub use block::Block;
pub use error::{WallError, WallResult};
pub use structure::Wall;
