//! Chart error types

use thiserror::Error;

/// Errors raised while binding a chart to its mount point
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The external chart library has not loaded yet
    #[error("Chart library not loaded")]
    LibraryUnavailable,

    /// The mount point is not (yet) in the document
    #[error("Mount point not found: {0}")]
    MountMissing(String),

    /// The spec cannot be drawn
    #[error("Invalid chart spec: {0}")]
    InvalidSpec(String),

    /// The library rejected the chart
    #[error("Chart backend error: {0}")]
    Backend(String),

    /// Retries were exhausted while the library or mount point was missing
    #[error("Chart library unavailable after {attempts} attempts")]
    Unavailable { attempts: u32 },
}

impl ChartError {
    /// Whether waiting and trying again may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ChartError::LibraryUnavailable | ChartError::MountMissing(_))
    }
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(ChartError::LibraryUnavailable.is_retryable());
        assert!(ChartError::MountMissing("cgpa".to_string()).is_retryable());
        assert!(!ChartError::InvalidSpec("empty".to_string()).is_retryable());
        assert!(!ChartError::Unavailable { attempts: 3 }.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = ChartError::Unavailable { attempts: 50 };
        assert_eq!(err.to_string(), "Chart library unavailable after 50 attempts");
    }
}
