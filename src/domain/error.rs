use thiserror::Error;

/// Domain-level errors for coordinate construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Coordinate value is not finite: {0}")]
    NonFiniteCoordinate(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            DomainError::NonFiniteCoordinate(f64::INFINITY).to_string(),
            "Coordinate value is not finite: inf"
        );
    }

    #[test]
    fn error_is_cloneable() {
        let err = DomainError::NonFiniteCoordinate(f64::NAN);
        let cloned = err.clone();
        assert!(matches!(cloned, DomainError::NonFiniteCoordinate(v) if v.is_nan()));
    }
}
