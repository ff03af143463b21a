use thiserror::Error;

/// Errors reported by [`TopK`](crate::TopK) construction and ingestion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The counter table needs at least one slot per row.
    #[error("invalid width: {0}, must be at least 1")]
    InvalidWidth(u32),
    /// The counter table needs at least one row.
    #[error("invalid depth: {0}, must be at least 1")]
    InvalidDepth(u32),
    /// The candidate set needs at least one slot.
    #[error("invalid capacity: {0}, must be at least 1")]
    InvalidCapacity(usize),
    /// The decay base must lie strictly between 0 and 1.
    #[error("invalid decay: {0}, which should be in range (0.0, 1.0)")]
    InvalidDecay(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::InvalidWidth(0).to_string(), "invalid width: 0, must be at least 1");
        assert_eq!(Error::InvalidDepth(0).to_string(), "invalid depth: 0, must be at least 1");
        assert_eq!(
            Error::InvalidDecay(1.5).to_string(),
            "invalid decay: 1.5, which should be in range (0.0, 1.0)"
        );
    }
}
