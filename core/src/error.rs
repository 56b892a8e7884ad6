use thiserror::Error;

/// Result type for labmeta operations
pub type Result<T> = std::result::Result<T, LabmetaError>;

/// Error types for labmeta operations
///
/// The mapping core itself never fails: missing or unparsable source values
/// become `None`. These errors only arise when loading input.
#[derive(Error, Debug)]
pub enum LabmetaError {
    /// Input could not be decoded into a source record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "request.json");
        let err: LabmetaError = io.into();
        assert!(matches!(err, LabmetaError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: request.json");

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LabmetaError = json.into();
        assert!(matches!(err, LabmetaError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
