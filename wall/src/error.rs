use thiserror::Error;

/// Errors raised by the wall model.
///
/// Neither variant represents a failed query: a search that matches nothing
/// returns `None` or an empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WallError {
    /// A required input was missing when building a structure.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not defined for this block variant.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

pub type WallResult<T> = Result<T, WallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = WallError::InvalidArgument("blocks cannot be null".into());
        assert_eq!(err.to_string(), "invalid argument: blocks cannot be null");

        let err = WallError::UnsupportedOperation("composite block has no color".into());
        assert_eq!(
            err.to_string(),
            "unsupported operation: composite block has no color"
        );
    }
}
