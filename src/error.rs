use thiserror::Error;

/// A shape, written as `(height, width)`.
pub type Shape = (usize, usize);

/// Failures of the arithmetic and matrix algorithms in this crate.
///
/// Every variant is a precondition violation. They are detected
/// before any output is produced, so a failed operation never
/// yields a partially-computed value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("Dimension mismatch in {operation}: {left:?} vs {right:?}")]
  DimensionMismatch {
    operation: &'static str,
    left: Shape,
    right: Shape,
  },
  #[error("Expected a square matrix in {operation}, got {height}x{width}")]
  InvalidShape {
    operation: &'static str,
    height: usize,
    width: usize,
  },
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Matrix is singular")]
  SingularMatrix,
}

impl Error {
  pub fn dimension_mismatch(operation: &'static str, left: Shape, right: Shape) -> Self {
    Self::DimensionMismatch { operation, left, right }
  }

  pub fn invalid_shape(operation: &'static str, shape: Shape) -> Self {
    Self::InvalidShape { operation, height: shape.0, width: shape.1 }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_messages() {
    assert_eq!(
      Error::dimension_mismatch("addition", (2, 3), (3, 2)).to_string(),
      "Dimension mismatch in addition: (2, 3) vs (3, 2)",
    );
    assert_eq!(
      Error::invalid_shape("determinant", (2, 3)).to_string(),
      "Expected a square matrix in determinant, got 2x3",
    );
    assert_eq!(Error::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(Error::SingularMatrix.to_string(), "Matrix is singular");
  }
}
