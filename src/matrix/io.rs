//! Plain-text input and output for matrices.

use super::Matrix;

use itertools::Itertools;
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseMatrixError {
  #[error("Expected {expected} matrix entries but found {actual}")]
  WrongCount {
    expected: usize,
    actual: usize,
  },
  #[error("Invalid matrix entry {0:?}")]
  InvalidElement(String),
}

impl<T: FromStr> Matrix<T> {
  /// Reads exactly `height * width` whitespace-separated entries in
  /// row-major order.
  pub fn parse(height: usize, width: usize, text: &str) -> Result<Matrix<T>, ParseMatrixError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let expected = height * width;
    if tokens.len() != expected {
      return Err(ParseMatrixError::WrongCount { expected, actual: tokens.len() });
    }
    let mut elements = Vec::with_capacity(expected);
    for token in tokens {
      let elem = token.parse().map_err(|_| ParseMatrixError::InvalidElement(token.to_owned()))?;
      elements.push(elem);
    }
    let mut elements = elements.into_iter();
    Ok(Matrix::from_generator(height, width, |_| {
      // unwrap: We checked the count above, and from_generator visits
      // each cell exactly once.
      elements.next().unwrap()
    }))
  }
}

/// Entries are separated by tabs, and rows by newlines.
impl<T: Display> Display for Matrix<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let text = self.rows()
      .map(|row| row.iter().join("\t"))
      .join("\n");
    write!(f, "{text}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fraction::Rational;

  #[test]
  fn test_parse() {
    let matrix = Matrix::<i64>::parse(2, 3, "1 2 3\n4 5 6").unwrap();
    assert_eq!(matrix.into_row_major(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
  }

  #[test]
  fn test_parse_ignores_line_structure() {
    let matrix = Matrix::<i64>::parse(2, 2, "  1\t2 3\n\n 4 ").unwrap();
    assert_eq!(matrix.into_row_major(), vec![vec![1, 2], vec![3, 4]]);
  }

  #[test]
  fn test_parse_fractions() {
    let matrix = Matrix::<Rational>::parse(1, 2, "1/2 -3/4").unwrap();
    assert_eq!(matrix[0], [Rational::new(1, 2), Rational::new(-3, 4)]);
  }

  #[test]
  fn test_parse_wrong_count() {
    assert_eq!(
      Matrix::<i64>::parse(2, 2, "1 2 3"),
      Err(ParseMatrixError::WrongCount { expected: 4, actual: 3 }),
    );
    assert_eq!(
      Matrix::<i64>::parse(1, 1, "1 2"),
      Err(ParseMatrixError::WrongCount { expected: 1, actual: 2 }),
    );
  }

  #[test]
  fn test_parse_bad_element() {
    assert_eq!(
      Matrix::<i64>::parse(1, 2, "1 x"),
      Err(ParseMatrixError::InvalidElement(String::from("x"))),
    );
  }

  #[test]
  fn test_display() {
    let matrix = Matrix::new(vec![vec![1, -2], vec![3, 4]]).unwrap();
    assert_eq!(matrix.to_string(), "1\t-2\n3\t4");

    let matrix = Matrix::new(vec![vec![Rational::new(1, 2), Rational::from(3)]]).unwrap();
    assert_eq!(matrix.to_string(), "1/2\t3");
  }

  #[test]
  fn test_display_then_parse() {
    let matrix = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(Matrix::<i64>::parse(2, 3, &matrix.to_string()), Ok(matrix));
  }
}
