/// A leaf block with a fixed color and material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicBlock {
    color: String,
    material: String,
}

impl AtomicBlock {
    pub fn new(color: impl Into<String>, material: impl Into<String>) -> Self {
        AtomicBlock {
            color: color.into(),
            material: material.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn material(&self) -> &str {
        &self.material
    }
}
