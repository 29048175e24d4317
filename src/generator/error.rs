use thiserror::Error;

use crate::domain::{BoundingBox, DomainError};

/// Generation-level errors; every variant is a configuration problem
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Cluster count must be nonzero")]
    NoClusters,

    #[error("Bounding box is degenerate: {0:?}")]
    DegenerateBounds(BoundingBox),

    #[error("Cluster radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            GeneratorError::NoClusters.to_string(),
            "Cluster count must be nonzero"
        );
        assert_eq!(
            GeneratorError::InvalidRadius(-1.0).to_string(),
            "Cluster radius must be finite and non-negative, got -1"
        );
    }

    #[test]
    fn domain_error_conversion() {
        let domain_err = DomainError::NonFiniteCoordinate(f64::INFINITY);
        let gen_err = GeneratorError::from(domain_err);

        match gen_err {
            GeneratorError::Domain(DomainError::NonFiniteCoordinate(_)) => {}
            _ => panic!("Expected Domain error variant"),
        }
    }
}
