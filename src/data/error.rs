//! Student record error types

use thiserror::Error;

/// Errors raised while loading or validating a student record
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be deserialized
    #[error("Parse error: {0}")]
    Parse(String),

    /// Two subjects share a course code
    #[error("Duplicate subject code: {0}")]
    DuplicateSubject(String),

    /// Semester numbers are not strictly increasing
    #[error("Semester {current} follows semester {previous}; semesters must be strictly increasing")]
    SemesterOrder { previous: u32, current: u32 },

    /// Calendar event date is not `YYYY-MM-DD`
    #[error("Invalid date {date:?} on event {title:?}")]
    InvalidDate { title: String, date: String },

    /// Credit totals cannot produce a completion ratio
    #[error("Invalid credits: {0}")]
    InvalidCredits(String),
}

impl From<toml::de::Error> for DataError {
    fn from(err: toml::de::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

/// Result type alias for record operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::DuplicateSubject("IT701".to_string());
        assert_eq!(err.to_string(), "Duplicate subject code: IT701");

        let err = DataError::SemesterOrder {
            previous: 3,
            current: 2,
        };
        assert_eq!(
            err.to_string(),
            "Semester 2 follows semester 3; semesters must be strictly increasing"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let data_err: DataError = io_err.into();
        assert!(matches!(data_err, DataError::Io(_)));
    }
}
