use thiserror::Error;

/// Top-level error type for Vocable.
///
/// Scoring itself never fails; these variants cover the edges around it:
/// configuration, threshold validation, file I/O and batch input parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocableError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid mastery threshold: {value} is outside 0..=100")]
    InvalidThreshold { value: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Batch input error on line {line}: {message}")]
    Batch { line: usize, message: String },
}

impl From<toml::de::Error> for VocableError {
    fn from(err: toml::de::Error) -> Self {
        VocableError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for VocableError {
    fn from(err: toml::ser::Error) -> Self {
        VocableError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for VocableError {
    fn from(err: serde_json::Error) -> Self {
        VocableError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Vocable operations.
pub type Result<T> = std::result::Result<T, VocableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VocableError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = VocableError::InvalidThreshold { value: 150 };
        assert_eq!(
            err.to_string(),
            "Invalid mastery threshold: 150 is outside 0..=100"
        );
    }

    #[test]
    fn test_batch_error_display() {
        let err = VocableError::Batch {
            line: 3,
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Batch input error on line 3: expected value"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VocableError = io_err.into();
        assert!(matches!(err, VocableError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let err: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        let err: VocableError = err.unwrap_err().into();
        assert!(matches!(err, VocableError::Config(_)));
    }

    #[test]
    fn test_error_from_toml_ser() {
        // A bare integer cannot be a TOML document.
        let err = toml::to_string(&42u32).unwrap_err();
        let err: VocableError = err.into();
        assert!(matches!(err, VocableError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ invalid }");
        let err: VocableError = err.unwrap_err().into();
        assert!(matches!(err, VocableError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(value.to_string())
        }

        assert_eq!(inner().unwrap(), "42");
    }
}
