use thiserror::Error;

#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("Record store error: {0}")]
    RecordStore(String),

    #[error("Object storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed attribute '{attribute}' on record {id}")]
    MalformedAttribute { id: String, attribute: String },
}

impl AugmentError {
    /// Wraps an SDK error, keeping the full debug chain that the SDK's
    /// `Display` impl hides (service code, request id).
    pub fn record_store<E: std::fmt::Debug>(err: E) -> Self {
        AugmentError::RecordStore(format!("{:?}", err))
    }

    pub fn storage<E: std::fmt::Debug>(err: E) -> Self {
        AugmentError::Storage(format!("{:?}", err))
    }
}

pub type Result<T> = std::result::Result<T, AugmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AugmentError = io.into();
        assert!(matches!(err, AugmentError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn test_malformed_attribute_message() {
        let err = AugmentError::MalformedAttribute {
            id: "42".to_string(),
            attribute: "input_text".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed attribute 'input_text' on record 42"
        );
    }
}
