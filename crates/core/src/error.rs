#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("Type mismatch: {vital} expects a number, got {found}")]
    TypeMismatch {
        vital: &'static str,
        found: &'static str,
    },

    #[error("Alert output failed: {0}")]
    Alert(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_type_mismatch() {
        let err = VitalsError::TypeMismatch {
            vital: "Temperature",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch: Temperature expects a number, got string"
        );
    }

    #[test]
    fn io_error_converts_into_alert() {
        let err: VitalsError = std::io::Error::other("broken pipe").into();
        assert!(err.to_string().starts_with("Alert output failed:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
